//! Built-in code tables from `linux/input-event-codes.h`
//!
//! Category prefixes are stripped (`KEY_ESC` is `ESC`). Button codes keep
//! `BTN_` so they never collide with key names. Header aliases that point at
//! an already-named code are left out.

/// `BUS_*` bus types
pub const BUS_TYPES: &[(u16, &str)] = &[
    (0x01, "PCI"),
    (0x02, "ISAPNP"),
    (0x03, "USB"),
    (0x04, "HIL"),
    (0x05, "BLUETOOTH"),
    (0x06, "VIRTUAL"),
    (0x10, "ISA"),
    (0x11, "I8042"),
    (0x12, "XTKBD"),
    (0x13, "RS232"),
    (0x14, "GAMEPORT"),
    (0x15, "PARPORT"),
    (0x16, "AMIGA"),
    (0x17, "ADB"),
    (0x18, "I2C"),
    (0x19, "HOST"),
    (0x1a, "GSC"),
    (0x1b, "ATARI"),
    (0x1c, "SPI"),
    (0x1d, "RMI"),
    (0x1e, "CEC"),
    (0x1f, "INTEL_ISHTP"),
    (0x20, "AMD_SFH"),
];

/// `EV_*` event categories
pub const CATEGORIES: &[(u16, &str)] = &[
    (0x00, "SYN"),
    (0x01, "KEY"),
    (0x02, "REL"),
    (0x03, "ABS"),
    (0x04, "MSC"),
    (0x05, "SW"),
    (0x11, "LED"),
    (0x12, "SND"),
    (0x14, "REP"),
    (0x15, "FF"),
    (0x16, "PWR"),
    (0x17, "FF_STATUS"),
];

/// `SYN_*` synchronization events
pub const SYN_CODES: &[(u16, &str)] = &[
    (0x00, "REPORT"),
    (0x01, "CONFIG"),
    (0x02, "MT_REPORT"),
    (0x03, "DROPPED"),
];

/// `KEY_*` and `BTN_*` codes
pub const KEY_CODES: &[(u16, &str)] = &[
    (0x000, "RESERVED"),
    (0x001, "ESC"),
    (0x002, "1"),
    (0x003, "2"),
    (0x004, "3"),
    (0x005, "4"),
    (0x006, "5"),
    (0x007, "6"),
    (0x008, "7"),
    (0x009, "8"),
    (0x00a, "9"),
    (0x00b, "0"),
    (0x00c, "MINUS"),
    (0x00d, "EQUAL"),
    (0x00e, "BACKSPACE"),
    (0x00f, "TAB"),
    (0x010, "Q"),
    (0x011, "W"),
    (0x012, "E"),
    (0x013, "R"),
    (0x014, "T"),
    (0x015, "Y"),
    (0x016, "U"),
    (0x017, "I"),
    (0x018, "O"),
    (0x019, "P"),
    (0x01a, "LEFTBRACE"),
    (0x01b, "RIGHTBRACE"),
    (0x01c, "ENTER"),
    (0x01d, "LEFTCTRL"),
    (0x01e, "A"),
    (0x01f, "S"),
    (0x020, "D"),
    (0x021, "F"),
    (0x022, "G"),
    (0x023, "H"),
    (0x024, "J"),
    (0x025, "K"),
    (0x026, "L"),
    (0x027, "SEMICOLON"),
    (0x028, "APOSTROPHE"),
    (0x029, "GRAVE"),
    (0x02a, "LEFTSHIFT"),
    (0x02b, "BACKSLASH"),
    (0x02c, "Z"),
    (0x02d, "X"),
    (0x02e, "C"),
    (0x02f, "V"),
    (0x030, "B"),
    (0x031, "N"),
    (0x032, "M"),
    (0x033, "COMMA"),
    (0x034, "DOT"),
    (0x035, "SLASH"),
    (0x036, "RIGHTSHIFT"),
    (0x037, "KPASTERISK"),
    (0x038, "LEFTALT"),
    (0x039, "SPACE"),
    (0x03a, "CAPSLOCK"),
    (0x03b, "F1"),
    (0x03c, "F2"),
    (0x03d, "F3"),
    (0x03e, "F4"),
    (0x03f, "F5"),
    (0x040, "F6"),
    (0x041, "F7"),
    (0x042, "F8"),
    (0x043, "F9"),
    (0x044, "F10"),
    (0x045, "NUMLOCK"),
    (0x046, "SCROLLLOCK"),
    (0x047, "KP7"),
    (0x048, "KP8"),
    (0x049, "KP9"),
    (0x04a, "KPMINUS"),
    (0x04b, "KP4"),
    (0x04c, "KP5"),
    (0x04d, "KP6"),
    (0x04e, "KPPLUS"),
    (0x04f, "KP1"),
    (0x050, "KP2"),
    (0x051, "KP3"),
    (0x052, "KP0"),
    (0x053, "KPDOT"),
    (0x055, "ZENKAKUHANKAKU"),
    (0x056, "102ND"),
    (0x057, "F11"),
    (0x058, "F12"),
    (0x059, "RO"),
    (0x05a, "KATAKANA"),
    (0x05b, "HIRAGANA"),
    (0x05c, "HENKAN"),
    (0x05d, "KATAKANAHIRAGANA"),
    (0x05e, "MUHENKAN"),
    (0x05f, "KPJPCOMMA"),
    (0x060, "KPENTER"),
    (0x061, "RIGHTCTRL"),
    (0x062, "KPSLASH"),
    (0x063, "SYSRQ"),
    (0x064, "RIGHTALT"),
    (0x065, "LINEFEED"),
    (0x066, "HOME"),
    (0x067, "UP"),
    (0x068, "PAGEUP"),
    (0x069, "LEFT"),
    (0x06a, "RIGHT"),
    (0x06b, "END"),
    (0x06c, "DOWN"),
    (0x06d, "PAGEDOWN"),
    (0x06e, "INSERT"),
    (0x06f, "DELETE"),
    (0x070, "MACRO"),
    (0x071, "MUTE"),
    (0x072, "VOLUMEDOWN"),
    (0x073, "VOLUMEUP"),
    (0x074, "POWER"),
    (0x075, "KPEQUAL"),
    (0x076, "KPPLUSMINUS"),
    (0x077, "PAUSE"),
    (0x078, "SCALE"),
    (0x079, "KPCOMMA"),
    (0x07a, "HANGEUL"),
    (0x07b, "HANJA"),
    (0x07c, "YEN"),
    (0x07d, "LEFTMETA"),
    (0x07e, "RIGHTMETA"),
    (0x07f, "COMPOSE"),
    (0x080, "STOP"),
    (0x081, "AGAIN"),
    (0x082, "PROPS"),
    (0x083, "UNDO"),
    (0x084, "FRONT"),
    (0x085, "COPY"),
    (0x086, "OPEN"),
    (0x087, "PASTE"),
    (0x088, "FIND"),
    (0x089, "CUT"),
    (0x08a, "HELP"),
    (0x08b, "MENU"),
    (0x08c, "CALC"),
    (0x08d, "SETUP"),
    (0x08e, "SLEEP"),
    (0x08f, "WAKEUP"),
    (0x090, "FILE"),
    (0x091, "SENDFILE"),
    (0x092, "DELETEFILE"),
    (0x093, "XFER"),
    (0x094, "PROG1"),
    (0x095, "PROG2"),
    (0x096, "WWW"),
    (0x097, "MSDOS"),
    (0x098, "COFFEE"),
    (0x099, "ROTATE_DISPLAY"),
    (0x09a, "CYCLEWINDOWS"),
    (0x09b, "MAIL"),
    (0x09c, "BOOKMARKS"),
    (0x09d, "COMPUTER"),
    (0x09e, "BACK"),
    (0x09f, "FORWARD"),
    (0x0a0, "CLOSECD"),
    (0x0a1, "EJECTCD"),
    (0x0a2, "EJECTCLOSECD"),
    (0x0a3, "NEXTSONG"),
    (0x0a4, "PLAYPAUSE"),
    (0x0a5, "PREVIOUSSONG"),
    (0x0a6, "STOPCD"),
    (0x0a7, "RECORD"),
    (0x0a8, "REWIND"),
    (0x0a9, "PHONE"),
    (0x0aa, "ISO"),
    (0x0ab, "CONFIG"),
    (0x0ac, "HOMEPAGE"),
    (0x0ad, "REFRESH"),
    (0x0ae, "EXIT"),
    (0x0af, "MOVE"),
    (0x0b0, "EDIT"),
    (0x0b1, "SCROLLUP"),
    (0x0b2, "SCROLLDOWN"),
    (0x0b3, "KPLEFTPAREN"),
    (0x0b4, "KPRIGHTPAREN"),
    (0x0b5, "NEW"),
    (0x0b6, "REDO"),
    (0x0b7, "F13"),
    (0x0b8, "F14"),
    (0x0b9, "F15"),
    (0x0ba, "F16"),
    (0x0bb, "F17"),
    (0x0bc, "F18"),
    (0x0bd, "F19"),
    (0x0be, "F20"),
    (0x0bf, "F21"),
    (0x0c0, "F22"),
    (0x0c1, "F23"),
    (0x0c2, "F24"),
    (0x0c8, "PLAYCD"),
    (0x0c9, "PAUSECD"),
    (0x0ca, "PROG3"),
    (0x0cb, "PROG4"),
    (0x0cc, "ALL_APPLICATIONS"),
    (0x0cd, "SUSPEND"),
    (0x0ce, "CLOSE"),
    (0x0cf, "PLAY"),
    (0x0d0, "FASTFORWARD"),
    (0x0d1, "BASSBOOST"),
    (0x0d2, "PRINT"),
    (0x0d3, "HP"),
    (0x0d4, "CAMERA"),
    (0x0d5, "SOUND"),
    (0x0d6, "QUESTION"),
    (0x0d7, "EMAIL"),
    (0x0d8, "CHAT"),
    (0x0d9, "SEARCH"),
    (0x0da, "CONNECT"),
    (0x0db, "FINANCE"),
    (0x0dc, "SPORT"),
    (0x0dd, "SHOP"),
    (0x0de, "ALTERASE"),
    (0x0df, "CANCEL"),
    (0x0e0, "BRIGHTNESSDOWN"),
    (0x0e1, "BRIGHTNESSUP"),
    (0x0e2, "MEDIA"),
    (0x0e3, "SWITCHVIDEOMODE"),
    (0x0e4, "KBDILLUMTOGGLE"),
    (0x0e5, "KBDILLUMDOWN"),
    (0x0e6, "KBDILLUMUP"),
    (0x0e7, "SEND"),
    (0x0e8, "REPLY"),
    (0x0e9, "FORWARDMAIL"),
    (0x0ea, "SAVE"),
    (0x0eb, "DOCUMENTS"),
    (0x0ec, "BATTERY"),
    (0x0ed, "BLUETOOTH"),
    (0x0ee, "WLAN"),
    (0x0ef, "UWB"),
    (0x0f0, "UNKNOWN"),
    (0x0f1, "VIDEO_NEXT"),
    (0x0f2, "VIDEO_PREV"),
    (0x0f3, "BRIGHTNESS_CYCLE"),
    (0x0f4, "BRIGHTNESS_AUTO"),
    (0x0f5, "DISPLAY_OFF"),
    (0x0f6, "WWAN"),
    (0x0f7, "RFKILL"),
    (0x0f8, "MICMUTE"),
    (0x100, "BTN_0"),
    (0x101, "BTN_1"),
    (0x102, "BTN_2"),
    (0x103, "BTN_3"),
    (0x104, "BTN_4"),
    (0x105, "BTN_5"),
    (0x106, "BTN_6"),
    (0x107, "BTN_7"),
    (0x108, "BTN_8"),
    (0x109, "BTN_9"),
    (0x110, "BTN_LEFT"),
    (0x111, "BTN_RIGHT"),
    (0x112, "BTN_MIDDLE"),
    (0x113, "BTN_SIDE"),
    (0x114, "BTN_EXTRA"),
    (0x115, "BTN_FORWARD"),
    (0x116, "BTN_BACK"),
    (0x117, "BTN_TASK"),
    (0x120, "BTN_TRIGGER"),
    (0x121, "BTN_THUMB"),
    (0x122, "BTN_THUMB2"),
    (0x123, "BTN_TOP"),
    (0x124, "BTN_TOP2"),
    (0x125, "BTN_PINKIE"),
    (0x126, "BTN_BASE"),
    (0x127, "BTN_BASE2"),
    (0x128, "BTN_BASE3"),
    (0x129, "BTN_BASE4"),
    (0x12a, "BTN_BASE5"),
    (0x12b, "BTN_BASE6"),
    (0x12f, "BTN_DEAD"),
    (0x130, "BTN_SOUTH"),
    (0x131, "BTN_EAST"),
    (0x132, "BTN_C"),
    (0x133, "BTN_NORTH"),
    (0x134, "BTN_WEST"),
    (0x135, "BTN_Z"),
    (0x136, "BTN_TL"),
    (0x137, "BTN_TR"),
    (0x138, "BTN_TL2"),
    (0x139, "BTN_TR2"),
    (0x13a, "BTN_SELECT"),
    (0x13b, "BTN_START"),
    (0x13c, "BTN_MODE"),
    (0x13d, "BTN_THUMBL"),
    (0x13e, "BTN_THUMBR"),
    (0x140, "BTN_TOOL_PEN"),
    (0x141, "BTN_TOOL_RUBBER"),
    (0x142, "BTN_TOOL_BRUSH"),
    (0x143, "BTN_TOOL_PENCIL"),
    (0x144, "BTN_TOOL_AIRBRUSH"),
    (0x145, "BTN_TOOL_FINGER"),
    (0x146, "BTN_TOOL_MOUSE"),
    (0x147, "BTN_TOOL_LENS"),
    (0x148, "BTN_TOOL_QUINTTAP"),
    (0x149, "BTN_STYLUS3"),
    (0x14a, "BTN_TOUCH"),
    (0x14b, "BTN_STYLUS"),
    (0x14c, "BTN_STYLUS2"),
    (0x14d, "BTN_TOOL_DOUBLETAP"),
    (0x14e, "BTN_TOOL_TRIPLETAP"),
    (0x14f, "BTN_TOOL_QUADTAP"),
    (0x150, "BTN_GEAR_DOWN"),
    (0x151, "BTN_GEAR_UP"),
    (0x160, "OK"),
    (0x161, "SELECT"),
    (0x162, "GOTO"),
    (0x163, "CLEAR"),
    (0x164, "POWER2"),
    (0x165, "OPTION"),
    (0x166, "INFO"),
    (0x167, "TIME"),
    (0x168, "VENDOR"),
    (0x169, "ARCHIVE"),
    (0x16a, "PROGRAM"),
    (0x16b, "CHANNEL"),
    (0x16c, "FAVORITES"),
    (0x16d, "EPG"),
    (0x16e, "PVR"),
    (0x16f, "MHP"),
    (0x170, "LANGUAGE"),
    (0x171, "TITLE"),
    (0x172, "SUBTITLE"),
    (0x173, "ANGLE"),
    (0x174, "FULL_SCREEN"),
    (0x175, "MODE"),
    (0x176, "KEYBOARD"),
    (0x177, "ASPECT_RATIO"),
    (0x178, "PC"),
    (0x179, "TV"),
    (0x17a, "TV2"),
    (0x17b, "VCR"),
    (0x17c, "VCR2"),
    (0x17d, "SAT"),
    (0x17e, "SAT2"),
    (0x17f, "CD"),
    (0x180, "TAPE"),
    (0x181, "RADIO"),
    (0x182, "TUNER"),
    (0x183, "PLAYER"),
    (0x184, "TEXT"),
    (0x185, "DVD"),
    (0x186, "AUX"),
    (0x187, "MP3"),
    (0x188, "AUDIO"),
    (0x189, "VIDEO"),
    (0x18a, "DIRECTORY"),
    (0x18b, "LIST"),
    (0x18c, "MEMO"),
    (0x18d, "CALENDAR"),
    (0x18e, "RED"),
    (0x18f, "GREEN"),
    (0x190, "YELLOW"),
    (0x191, "BLUE"),
    (0x192, "CHANNELUP"),
    (0x193, "CHANNELDOWN"),
    (0x194, "FIRST"),
    (0x195, "LAST"),
    (0x196, "AB"),
    (0x197, "NEXT"),
    (0x198, "RESTART"),
    (0x199, "SLOW"),
    (0x19a, "SHUFFLE"),
    (0x19b, "BREAK"),
    (0x19c, "PREVIOUS"),
    (0x19d, "DIGITS"),
    (0x19e, "TEEN"),
    (0x19f, "TWEN"),
    (0x1a0, "VIDEOPHONE"),
    (0x1a1, "GAMES"),
    (0x1a2, "ZOOMIN"),
    (0x1a3, "ZOOMOUT"),
    (0x1a4, "ZOOMRESET"),
    (0x1a5, "WORDPROCESSOR"),
    (0x1a6, "EDITOR"),
    (0x1a7, "SPREADSHEET"),
    (0x1a8, "GRAPHICSEDITOR"),
    (0x1a9, "PRESENTATION"),
    (0x1aa, "DATABASE"),
    (0x1ab, "NEWS"),
    (0x1ac, "VOICEMAIL"),
    (0x1ad, "ADDRESSBOOK"),
    (0x1ae, "MESSENGER"),
    (0x1af, "DISPLAYTOGGLE"),
    (0x1b0, "SPELLCHECK"),
    (0x1b1, "LOGOFF"),
    (0x1b2, "DOLLAR"),
    (0x1b3, "EURO"),
    (0x1b4, "FRAMEBACK"),
    (0x1b5, "FRAMEFORWARD"),
    (0x1b6, "CONTEXT_MENU"),
    (0x1b7, "MEDIA_REPEAT"),
    (0x1b8, "10CHANNELSUP"),
    (0x1b9, "10CHANNELSDOWN"),
    (0x1ba, "IMAGES"),
    (0x1bc, "NOTIFICATION_CENTER"),
    (0x1bd, "PICKUP_PHONE"),
    (0x1be, "HANGUP_PHONE"),
    (0x1bf, "LINK_PHONE"),
    (0x1c0, "DEL_EOL"),
    (0x1c1, "DEL_EOS"),
    (0x1c2, "INS_LINE"),
    (0x1c3, "DEL_LINE"),
    (0x1d0, "FN"),
    (0x1d1, "FN_ESC"),
    (0x1d2, "FN_F1"),
    (0x1d3, "FN_F2"),
    (0x1d4, "FN_F3"),
    (0x1d5, "FN_F4"),
    (0x1d6, "FN_F5"),
    (0x1d7, "FN_F6"),
    (0x1d8, "FN_F7"),
    (0x1d9, "FN_F8"),
    (0x1da, "FN_F9"),
    (0x1db, "FN_F10"),
    (0x1dc, "FN_F11"),
    (0x1dd, "FN_F12"),
    (0x1de, "FN_1"),
    (0x1df, "FN_2"),
    (0x1e0, "FN_D"),
    (0x1e1, "FN_E"),
    (0x1e2, "FN_F"),
    (0x1e3, "FN_S"),
    (0x1e4, "FN_B"),
    (0x1e5, "FN_RIGHT_SHIFT"),
    (0x1f1, "BRL_DOT1"),
    (0x1f2, "BRL_DOT2"),
    (0x1f3, "BRL_DOT3"),
    (0x1f4, "BRL_DOT4"),
    (0x1f5, "BRL_DOT5"),
    (0x1f6, "BRL_DOT6"),
    (0x1f7, "BRL_DOT7"),
    (0x1f8, "BRL_DOT8"),
    (0x1f9, "BRL_DOT9"),
    (0x1fa, "BRL_DOT10"),
    (0x200, "NUMERIC_0"),
    (0x201, "NUMERIC_1"),
    (0x202, "NUMERIC_2"),
    (0x203, "NUMERIC_3"),
    (0x204, "NUMERIC_4"),
    (0x205, "NUMERIC_5"),
    (0x206, "NUMERIC_6"),
    (0x207, "NUMERIC_7"),
    (0x208, "NUMERIC_8"),
    (0x209, "NUMERIC_9"),
    (0x20a, "NUMERIC_STAR"),
    (0x20b, "NUMERIC_POUND"),
    (0x20c, "NUMERIC_A"),
    (0x20d, "NUMERIC_B"),
    (0x20e, "NUMERIC_C"),
    (0x20f, "NUMERIC_D"),
    (0x210, "CAMERA_FOCUS"),
    (0x211, "WPS_BUTTON"),
    (0x212, "TOUCHPAD_TOGGLE"),
    (0x213, "TOUCHPAD_ON"),
    (0x214, "TOUCHPAD_OFF"),
    (0x215, "CAMERA_ZOOMIN"),
    (0x216, "CAMERA_ZOOMOUT"),
    (0x217, "CAMERA_UP"),
    (0x218, "CAMERA_DOWN"),
    (0x219, "CAMERA_LEFT"),
    (0x21a, "CAMERA_RIGHT"),
    (0x21b, "ATTENDANT_ON"),
    (0x21c, "ATTENDANT_OFF"),
    (0x21d, "ATTENDANT_TOGGLE"),
    (0x21e, "LIGHTS_TOGGLE"),
    (0x220, "BTN_DPAD_UP"),
    (0x221, "BTN_DPAD_DOWN"),
    (0x222, "BTN_DPAD_LEFT"),
    (0x223, "BTN_DPAD_RIGHT"),
    (0x230, "ALS_TOGGLE"),
    (0x231, "ROTATE_LOCK_TOGGLE"),
    (0x232, "REFRESH_RATE_TOGGLE"),
    (0x240, "BUTTONCONFIG"),
    (0x241, "TASKMANAGER"),
    (0x242, "JOURNAL"),
    (0x243, "CONTROLPANEL"),
    (0x244, "APPSELECT"),
    (0x245, "SCREENSAVER"),
    (0x246, "VOICECOMMAND"),
    (0x247, "ASSISTANT"),
    (0x248, "KBD_LAYOUT_NEXT"),
    (0x249, "EMOJI_PICKER"),
    (0x24a, "DICTATE"),
    (0x24b, "CAMERA_ACCESS_ENABLE"),
    (0x24c, "CAMERA_ACCESS_DISABLE"),
    (0x24d, "CAMERA_ACCESS_TOGGLE"),
    (0x24e, "ACCESSIBILITY"),
    (0x24f, "DO_NOT_DISTURB"),
    (0x250, "BRIGHTNESS_MIN"),
    (0x251, "BRIGHTNESS_MAX"),
    (0x260, "KBDINPUTASSIST_PREV"),
    (0x261, "KBDINPUTASSIST_NEXT"),
    (0x262, "KBDINPUTASSIST_PREVGROUP"),
    (0x263, "KBDINPUTASSIST_NEXTGROUP"),
    (0x264, "KBDINPUTASSIST_ACCEPT"),
    (0x265, "KBDINPUTASSIST_CANCEL"),
    (0x266, "RIGHT_UP"),
    (0x267, "RIGHT_DOWN"),
    (0x268, "LEFT_UP"),
    (0x269, "LEFT_DOWN"),
    (0x26a, "ROOT_MENU"),
    (0x26b, "MEDIA_TOP_MENU"),
    (0x26c, "NUMERIC_11"),
    (0x26d, "NUMERIC_12"),
    (0x26e, "AUDIO_DESC"),
    (0x26f, "3D_MODE"),
    (0x270, "NEXT_FAVORITE"),
    (0x271, "STOP_RECORD"),
    (0x272, "PAUSE_RECORD"),
    (0x273, "VOD"),
    (0x274, "UNMUTE"),
    (0x275, "FASTREVERSE"),
    (0x276, "SLOWREVERSE"),
    (0x277, "DATA"),
    (0x278, "ONSCREEN_KEYBOARD"),
    (0x279, "PRIVACY_SCREEN_TOGGLE"),
    (0x27a, "SELECTIVE_SCREENSHOT"),
    (0x27b, "NEXT_ELEMENT"),
    (0x27c, "PREVIOUS_ELEMENT"),
    (0x27d, "AUTOPILOT_ENGAGE_TOGGLE"),
    (0x27e, "MARK_WAYPOINT"),
    (0x27f, "SOS"),
    (0x280, "NAV_CHART"),
    (0x281, "FISHING_CHART"),
    (0x282, "SINGLE_RANGE_RADAR"),
    (0x283, "DUAL_RANGE_RADAR"),
    (0x284, "RADAR_OVERLAY"),
    (0x285, "TRADITIONAL_SONAR"),
    (0x286, "CLEARVU_SONAR"),
    (0x287, "SIDEVU_SONAR"),
    (0x288, "NAV_INFO"),
    (0x289, "BRIGHTNESS_MENU"),
    (0x290, "MACRO1"),
    (0x291, "MACRO2"),
    (0x292, "MACRO3"),
    (0x293, "MACRO4"),
    (0x294, "MACRO5"),
    (0x295, "MACRO6"),
    (0x296, "MACRO7"),
    (0x297, "MACRO8"),
    (0x298, "MACRO9"),
    (0x299, "MACRO10"),
    (0x29a, "MACRO11"),
    (0x29b, "MACRO12"),
    (0x29c, "MACRO13"),
    (0x29d, "MACRO14"),
    (0x29e, "MACRO15"),
    (0x29f, "MACRO16"),
    (0x2a0, "MACRO17"),
    (0x2a1, "MACRO18"),
    (0x2a2, "MACRO19"),
    (0x2a3, "MACRO20"),
    (0x2a4, "MACRO21"),
    (0x2a5, "MACRO22"),
    (0x2a6, "MACRO23"),
    (0x2a7, "MACRO24"),
    (0x2a8, "MACRO25"),
    (0x2a9, "MACRO26"),
    (0x2aa, "MACRO27"),
    (0x2ab, "MACRO28"),
    (0x2ac, "MACRO29"),
    (0x2ad, "MACRO30"),
    (0x2b0, "MACRO_RECORD_START"),
    (0x2b1, "MACRO_RECORD_STOP"),
    (0x2b2, "MACRO_PRESET_CYCLE"),
    (0x2b3, "MACRO_PRESET1"),
    (0x2b4, "MACRO_PRESET2"),
    (0x2b5, "MACRO_PRESET3"),
    (0x2b8, "KBD_LCD_MENU1"),
    (0x2b9, "KBD_LCD_MENU2"),
    (0x2ba, "KBD_LCD_MENU3"),
    (0x2bb, "KBD_LCD_MENU4"),
    (0x2bc, "KBD_LCD_MENU5"),
    (0x2c0, "BTN_TRIGGER_HAPPY1"),
    (0x2c1, "BTN_TRIGGER_HAPPY2"),
    (0x2c2, "BTN_TRIGGER_HAPPY3"),
    (0x2c3, "BTN_TRIGGER_HAPPY4"),
    (0x2c4, "BTN_TRIGGER_HAPPY5"),
    (0x2c5, "BTN_TRIGGER_HAPPY6"),
    (0x2c6, "BTN_TRIGGER_HAPPY7"),
    (0x2c7, "BTN_TRIGGER_HAPPY8"),
    (0x2c8, "BTN_TRIGGER_HAPPY9"),
    (0x2c9, "BTN_TRIGGER_HAPPY10"),
    (0x2ca, "BTN_TRIGGER_HAPPY11"),
    (0x2cb, "BTN_TRIGGER_HAPPY12"),
    (0x2cc, "BTN_TRIGGER_HAPPY13"),
    (0x2cd, "BTN_TRIGGER_HAPPY14"),
    (0x2ce, "BTN_TRIGGER_HAPPY15"),
    (0x2cf, "BTN_TRIGGER_HAPPY16"),
    (0x2d0, "BTN_TRIGGER_HAPPY17"),
    (0x2d1, "BTN_TRIGGER_HAPPY18"),
    (0x2d2, "BTN_TRIGGER_HAPPY19"),
    (0x2d3, "BTN_TRIGGER_HAPPY20"),
    (0x2d4, "BTN_TRIGGER_HAPPY21"),
    (0x2d5, "BTN_TRIGGER_HAPPY22"),
    (0x2d6, "BTN_TRIGGER_HAPPY23"),
    (0x2d7, "BTN_TRIGGER_HAPPY24"),
    (0x2d8, "BTN_TRIGGER_HAPPY25"),
    (0x2d9, "BTN_TRIGGER_HAPPY26"),
    (0x2da, "BTN_TRIGGER_HAPPY27"),
    (0x2db, "BTN_TRIGGER_HAPPY28"),
    (0x2dc, "BTN_TRIGGER_HAPPY29"),
    (0x2dd, "BTN_TRIGGER_HAPPY30"),
    (0x2de, "BTN_TRIGGER_HAPPY31"),
    (0x2df, "BTN_TRIGGER_HAPPY32"),
    (0x2e0, "BTN_TRIGGER_HAPPY33"),
    (0x2e1, "BTN_TRIGGER_HAPPY34"),
    (0x2e2, "BTN_TRIGGER_HAPPY35"),
    (0x2e3, "BTN_TRIGGER_HAPPY36"),
    (0x2e4, "BTN_TRIGGER_HAPPY37"),
    (0x2e5, "BTN_TRIGGER_HAPPY38"),
    (0x2e6, "BTN_TRIGGER_HAPPY39"),
    (0x2e7, "BTN_TRIGGER_HAPPY40"),
];

/// `REL_*` relative axes
pub const REL_CODES: &[(u16, &str)] = &[
    (0x00, "X"),
    (0x01, "Y"),
    (0x02, "Z"),
    (0x03, "RX"),
    (0x04, "RY"),
    (0x05, "RZ"),
    (0x06, "HWHEEL"),
    (0x07, "DIAL"),
    (0x08, "WHEEL"),
    (0x09, "MISC"),
    (0x0a, "RESERVED"),
    (0x0b, "WHEEL_HI_RES"),
    (0x0c, "HWHEEL_HI_RES"),
];

/// `ABS_*` absolute axes
pub const ABS_CODES: &[(u16, &str)] = &[
    (0x00, "X"),
    (0x01, "Y"),
    (0x02, "Z"),
    (0x03, "RX"),
    (0x04, "RY"),
    (0x05, "RZ"),
    (0x06, "THROTTLE"),
    (0x07, "RUDDER"),
    (0x08, "WHEEL"),
    (0x09, "GAS"),
    (0x0a, "BRAKE"),
    (0x10, "HAT0X"),
    (0x11, "HAT0Y"),
    (0x12, "HAT1X"),
    (0x13, "HAT1Y"),
    (0x14, "HAT2X"),
    (0x15, "HAT2Y"),
    (0x16, "HAT3X"),
    (0x17, "HAT3Y"),
    (0x18, "PRESSURE"),
    (0x19, "DISTANCE"),
    (0x1a, "TILT_X"),
    (0x1b, "TILT_Y"),
    (0x1c, "TOOL_WIDTH"),
    (0x20, "VOLUME"),
    (0x21, "PROFILE"),
    (0x28, "MISC"),
    (0x2e, "RESERVED"),
    (0x2f, "MT_SLOT"),
    (0x30, "MT_TOUCH_MAJOR"),
    (0x31, "MT_TOUCH_MINOR"),
    (0x32, "MT_WIDTH_MAJOR"),
    (0x33, "MT_WIDTH_MINOR"),
    (0x34, "MT_ORIENTATION"),
    (0x35, "MT_POSITION_X"),
    (0x36, "MT_POSITION_Y"),
    (0x37, "MT_TOOL_TYPE"),
    (0x38, "MT_BLOB_ID"),
    (0x39, "MT_TRACKING_ID"),
    (0x3a, "MT_PRESSURE"),
    (0x3b, "MT_DISTANCE"),
    (0x3c, "MT_TOOL_X"),
    (0x3d, "MT_TOOL_Y"),
];

/// `MSC_*` miscellaneous events
pub const MSC_CODES: &[(u16, &str)] = &[
    (0x00, "SERIAL"),
    (0x01, "PULSELED"),
    (0x02, "GESTURE"),
    (0x03, "RAW"),
    (0x04, "SCAN"),
    (0x05, "TIMESTAMP"),
];

/// `SW_*` switches
pub const SW_CODES: &[(u16, &str)] = &[
    (0x00, "LID"),
    (0x01, "TABLET_MODE"),
    (0x02, "HEADPHONE_INSERT"),
    (0x03, "RFKILL_ALL"),
    (0x04, "MICROPHONE_INSERT"),
    (0x05, "DOCK"),
    (0x06, "LINEOUT_INSERT"),
    (0x07, "JACK_PHYSICAL_INSERT"),
    (0x08, "VIDEOOUT_INSERT"),
    (0x09, "CAMERA_LENS_COVER"),
    (0x0a, "KEYPAD_SLIDE"),
    (0x0b, "FRONT_PROXIMITY"),
    (0x0c, "ROTATE_LOCK"),
    (0x0d, "LINEIN_INSERT"),
    (0x0e, "MUTE_DEVICE"),
    (0x0f, "PEN_INSERTED"),
    (0x10, "MACHINE_COVER"),
    (0x11, "USB_INSERT"),
];

/// `LED_*` indicators
pub const LED_CODES: &[(u16, &str)] = &[
    (0x00, "NUML"),
    (0x01, "CAPSL"),
    (0x02, "SCROLLL"),
    (0x03, "COMPOSE"),
    (0x04, "KANA"),
    (0x05, "SLEEP"),
    (0x06, "SUSPEND"),
    (0x07, "MUTE"),
    (0x08, "MISC"),
    (0x09, "MAIL"),
    (0x0a, "CHARGING"),
];

/// `SND_*` sounds
pub const SND_CODES: &[(u16, &str)] = &[
    (0x00, "CLICK"),
    (0x01, "BELL"),
    (0x02, "TONE"),
];

/// `REP_*` autorepeat parameters
pub const REP_CODES: &[(u16, &str)] = &[
    (0x00, "DELAY"),
    (0x01, "PERIOD"),
];
