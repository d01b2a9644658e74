//! Compiled-in layout tables, one per [`Mode`].
//!
//! All data pages share the same centre zone (arrows, Enter, space, Backspace)
//! so that navigation keys stay in place when the page changes. The mode keys
//! around it differ per page so each page can return to where it came from.

use super::mode::Mode;
use super::special::SpecialKey;
use super::token::Token;

/// Cells per table side.
pub const GRID_SIZE: usize = 9;
/// Cells per zone side; a table is `ZONE_SIZE`×`ZONE_SIZE` zones.
pub const ZONE_SIZE: usize = 3;

type Grid = [[Token; GRID_SIZE]; GRID_SIZE];

/// Immutable 9×9 page of tokens.
#[derive(Debug, PartialEq, Eq)]
pub struct LayoutTable {
    mode: Mode,
    cells: Grid,
}

impl LayoutTable {
    const fn new(mode: Mode, cells: Grid) -> Self {
        Self { mode, cells }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Token at `row`, `col`. Indices outside the grid yield [`Token::Empty`].
    pub fn cell(&self, row: usize, col: usize) -> Token {
        self.cells
            .get(row)
            .and_then(|cols| cols.get(col))
            .copied()
            .unwrap_or(Token::Empty)
    }

    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// The 3×3 block whose top-left cell is (`offset_y`, `offset_x`).
    pub fn zone(&self, offset_x: usize, offset_y: usize) -> [[Token; ZONE_SIZE]; ZONE_SIZE] {
        let mut block = [[Token::Empty; ZONE_SIZE]; ZONE_SIZE];
        for (dy, row) in block.iter_mut().enumerate() {
            for (dx, slot) in row.iter_mut().enumerate() {
                *slot = self.cell(offset_y + dy, offset_x + dx);
            }
        }
        block
    }

    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

/// Returns the table for `mode`. Total and pure.
pub fn current_table(mode: Mode) -> &'static LayoutTable {
    match mode {
        Mode::Letters => &LETTERS,
        Mode::CapitalizedOnce => &CAPITALIZED_ONCE,
        Mode::CapsLocked => &CAPS_LOCKED,
        Mode::Numeric => &NUMERIC,
        Mode::Symbols => &SYMBOLS,
        Mode::Accents1 => &ACCENTS1,
        Mode::Accents2 => &ACCENTS2,
        Mode::ChangeModeMenu => &CHANGE_MODE_MENU,
        Mode::Emoji => &EMOJI,
    }
}

const fn t(text: &'static str) -> Token {
    Token::Literal(text)
}

const NUL: Token = Token::Empty;

const RET: Token = Token::Special(SpecialKey::Enter);
const BAK: Token = Token::Special(SpecialKey::Backspace);
const ARL: Token = Token::Special(SpecialKey::ArrowLeft);
const ARR: Token = Token::Special(SpecialKey::ArrowRight);
const ARU: Token = Token::Special(SpecialKey::ArrowUp);
const ARD: Token = Token::Special(SpecialKey::ArrowDown);
const SRC: Token = Token::Special(SpecialKey::Search);
const CPY: Token = Token::Special(SpecialKey::Copy);
const PST: Token = Token::Special(SpecialKey::Paste);

const LET: Token = Token::ModeSwitch(Mode::Letters);
const CAP: Token = Token::ModeSwitch(Mode::CapitalizedOnce);
const CPL: Token = Token::ModeSwitch(Mode::CapsLocked);
const NUM: Token = Token::ModeSwitch(Mode::Numeric);
const SYM: Token = Token::ModeSwitch(Mode::Symbols);
const AC1: Token = Token::ModeSwitch(Mode::Accents1);
const AC2: Token = Token::ModeSwitch(Mode::Accents2);
const CHM: Token = Token::ModeSwitch(Mode::ChangeModeMenu);
const EMO: Token = Token::ModeSwitch(Mode::Emoji);

#[rustfmt::skip]
static LETTERS: LayoutTable = LayoutTable::new(Mode::Letters, [
    [t("t"), t("c"), NUL,     t("q"), t("h"), t("j"),   NUL,    t("b"), t("e")],
    [t("r"), NUL,    NUL,     NUL,    t("u"), NUL,      NUL,    NUL,    t("s")],
    [t("."), NUL,    NUL,     NUL,    SYM,    NUL,      NUL,    NUL,    t(",")],

    [NUL,    NUL,    NUL,     ARL,    RET,    ARR,      NUL,    NUL,    NUL   ],
    [t("i"), t("k"), NUL,     NUM,    t(" "), CAP,      NUL,    t("w"), t("a")],
    [t("p"), NUL,    NUL,     ARU,    BAK,    ARD,      NUL,    NUL,    t("l")],

    [NUL,    NUL,    NUL,     CHM,    AC1,    NUL,      NUL,    NUL,    NUL   ],
    [t("x"), NUL,    NUL,     t("!"), t("y"), t("?"),   NUL,    NUL,    t("z")],
    [t("o"), t("v"), NUL,     t("m"), t("n"), t("g"),   NUL,    t("f"), t("d")],
]);

#[rustfmt::skip]
static CAPITALIZED_ONCE: LayoutTable = LayoutTable::new(Mode::CapitalizedOnce, [
    [t("T"), t("C"), NUL,     t("Q"), t("H"), t("J"),   NUL,    t("B"), t("E")],
    [t("R"), NUL,    NUL,     NUL,    t("U"), NUL,      NUL,    NUL,    t("S")],
    [t("."), NUL,    NUL,     NUL,    SYM,    NUL,      NUL,    NUL,    t(",")],

    [NUL,    NUL,    NUL,     ARL,    RET,    ARR,      NUL,    NUL,    NUL   ],
    [t("I"), t("K"), NUL,     NUM,    t(" "), CPL,      NUL,    t("W"), t("A")],
    [t("P"), NUL,    NUL,     ARU,    BAK,    ARD,      NUL,    NUL,    t("L")],

    [NUL,    NUL,    NUL,     CHM,    AC1,    NUL,      NUL,    NUL,    NUL   ],
    [t("X"), NUL,    NUL,     t("!"), t("Y"), t("?"),   NUL,    NUL,    t("Z")],
    [t("O"), t("V"), NUL,     t("M"), t("N"), t("G"),   NUL,    t("F"), t("D")],
]);

#[rustfmt::skip]
static CAPS_LOCKED: LayoutTable = LayoutTable::new(Mode::CapsLocked, [
    [t("T"), t("C"), NUL,     t("Q"), t("H"), t("J"),   NUL,    t("B"), t("E")],
    [t("R"), NUL,    NUL,     NUL,    t("U"), NUL,      NUL,    NUL,    t("S")],
    [t("."), NUL,    NUL,     NUL,    SYM,    NUL,      NUL,    NUL,    t(",")],

    [NUL,    NUL,    NUL,     ARL,    RET,    ARR,      NUL,    NUL,    NUL   ],
    [t("I"), t("K"), NUL,     NUM,    t(" "), LET,      NUL,    t("W"), t("A")],
    [t("P"), NUL,    NUL,     ARU,    BAK,    ARD,      NUL,    NUL,    t("L")],

    [NUL,    NUL,    NUL,     CHM,    AC1,    NUL,      NUL,    NUL,    NUL   ],
    [t("X"), NUL,    NUL,     t("!"), t("Y"), t("?"),   NUL,    NUL,    t("Z")],
    [t("O"), t("V"), NUL,     t("M"), t("N"), t("G"),   NUL,    t("F"), t("D")],
]);

#[rustfmt::skip]
static NUMERIC: LayoutTable = LayoutTable::new(Mode::Numeric, [
    [t("1"), t("2"), t("3"),  t("+"), t("-"), t("*"),   t("/"), t("="), t("%")],
    [t("4"), t("5"), t("6"),  NUL,    NUL,    NUL,      t("("), t(")"), t("^")],
    [t("7"), t("8"), t("9"),  NUL,    SYM,    NUL,      t("<"), t(">"), t("#")],

    [NUL,    t("0"), NUL,     ARL,    RET,    ARR,      NUL,    NUL,    NUL   ],
    [t("."), t(","), NUL,     LET,    t(" "), CAP,      t("$"), t("€"), t("£")],
    [NUL,    NUL,    NUL,     ARU,    BAK,    ARD,      NUL,    NUL,    NUL   ],

    [NUL,    NUL,    NUL,     CHM,    AC1,    NUL,      NUL,    NUL,    NUL   ],
    [t("±"), t("×"), t("÷"),  NUL,    NUL,    NUL,      t("½"), t("¼"), t("¾")],
    [NUL,    NUL,    NUL,     NUL,    NUL,    NUL,      t("°"), t("‰"), t("∞")],
]);

#[rustfmt::skip]
static SYMBOLS: LayoutTable = LayoutTable::new(Mode::Symbols, [
    [t("!"), t("@"), t("#"),  t("$"), t("%"), t("^"),   t("&"), t("*"), t("~")],
    [t("("), t(")"), t("_"),  t("-"), t("+"), t("="),   t("["), t("]"), t("|")],
    [t("{"), t("}"), t("\\"), NUL,    LET,    NUL,      t("<"), t(">"), t("/")],

    [NUL,    NUL,    NUL,     ARL,    RET,    ARR,      NUL,    NUL,    NUL   ],
    [t("'"), t("\""),t("`"),  NUM,    t(" "), CAP,      t(":"), t(";"), t("?")],
    [NUL,    NUL,    NUL,     ARU,    BAK,    ARD,      NUL,    NUL,    NUL   ],

    [CPY,    PST,    SRC,     CHM,    AC1,    NUL,      NUL,    NUL,    NUL   ],
    [t("§"), t("¶"), t("•"),  NUL,    NUL,    NUL,      t("©"), t("®"), t("™")],
    [t("¡"), t("¿"), t("…"),  NUL,    NUL,    NUL,      t("«"), t("»"), t("·")],
]);

#[rustfmt::skip]
static ACCENTS1: LayoutTable = LayoutTable::new(Mode::Accents1, [
    [t("à"), t("á"), t("â"),  t("è"), t("é"), t("ê"),   t("ì"), t("í"), t("î")],
    [t("ä"), t("ã"), t("å"),  t("ë"), t("ē"), t("ę"),   t("ï"), t("ī"), t("į")],
    [t("æ"), t("ç"), t("č"),  NUL,    SYM,    NUL,      t("ł"), t("ś"), t("š")],

    [NUL,    NUL,    NUL,     ARL,    RET,    ARR,      NUL,    NUL,    NUL   ],
    [t("ò"), t("ó"), t("ô"),  NUM,    t(" "), CAP,      t("ù"), t("ú"), t("û")],
    [t("ö"), t("õ"), t("ø"),  ARU,    BAK,    ARD,      t("ü"), t("ū"), t("ů")],

    [NUL,    NUL,    NUL,     CHM,    AC2,    NUL,      NUL,    NUL,    NUL   ],
    [t("ñ"), t("ń"), t("ß"),  NUL,    NUL,    NUL,      t("ý"), t("ÿ"), t("ž")],
    [t("œ"), t("ð"), t("þ"),  NUL,    LET,    NUL,      t("ź"), t("ż"), t("ř")],
]);

#[rustfmt::skip]
static ACCENTS2: LayoutTable = LayoutTable::new(Mode::Accents2, [
    [t("À"), t("Á"), t("Â"),  t("È"), t("É"), t("Ê"),   t("Ì"), t("Í"), t("Î")],
    [t("Ä"), t("Ã"), t("Å"),  t("Ë"), t("Ē"), t("Ę"),   t("Ï"), t("Ī"), t("Į")],
    [t("Æ"), t("Ç"), t("Č"),  NUL,    SYM,    NUL,      t("Ł"), t("Ś"), t("Š")],

    [NUL,    NUL,    NUL,     ARL,    RET,    ARR,      NUL,    NUL,    NUL   ],
    [t("Ò"), t("Ó"), t("Ô"),  NUM,    t(" "), CAP,      t("Ù"), t("Ú"), t("Û")],
    [t("Ö"), t("Õ"), t("Ø"),  ARU,    BAK,    ARD,      t("Ü"), t("Ū"), t("Ů")],

    [NUL,    NUL,    NUL,     CHM,    LET,    NUL,      NUL,    NUL,    NUL   ],
    [t("Ñ"), t("Ń"), t("ẞ"),  NUL,    NUL,    NUL,      t("Ý"), t("Ÿ"), t("Ž")],
    [t("Œ"), t("Ð"), t("Þ"),  NUL,    AC1,    NUL,      t("Ź"), t("Ż"), t("Ř")],
]);

#[rustfmt::skip]
static EMOJI: LayoutTable = LayoutTable::new(Mode::Emoji, [
    [t("😀"), t("😂"), t("😊"),  t("😍"), t("😘"), t("😎"),   t("🤔"), t("😢"), t("😡")],
    [t("👍"), t("👎"), t("👏"),  t("🙏"), t("💪"), t("👋"),   t("🎉"), t("🔥"), t("✨")],
    [t("❤️"), t("💔"), t("💯"),  NUL,     LET,     NUL,       t("✅"), t("❌"), t("⭐")],

    [NUL,     NUL,     NUL,      ARL,     RET,     ARR,       NUL,     NUL,     NUL    ],
    [t("🐶"), t("🐱"), t("🐭"),  NUM,     t(" "),  CAP,       t("🍕"), t("🍔"), t("🍟")],
    [t("🌞"), t("🌧️"), t("❄️"),  ARU,     BAK,     ARD,       t("☕"), t("🍺"), t("🍷")],

    [NUL,     NUL,     NUL,      CHM,     AC1,     NUL,       NUL,     NUL,     NUL    ],
    [t("🚗"), t("✈️"), t("🚀"),  NUL,     NUL,     NUL,       t("⚽"), t("🏀"), t("🎮")],
    [t("🏠"), t("🎁"), t("💡"),  NUL,     NUL,     NUL,       t("📱"), t("💻"), t("📷")],
]);

// Each zone picks one mode, so any fine position inside it selects that mode.
#[rustfmt::skip]
static CHANGE_MODE_MENU: LayoutTable = LayoutTable::new(Mode::ChangeModeMenu, [
    [LET, LET, LET,   CAP, CAP, CAP,   CPL, CPL, CPL],
    [LET, LET, LET,   CAP, CAP, CAP,   CPL, CPL, CPL],
    [LET, LET, LET,   CAP, CAP, CAP,   CPL, CPL, CPL],

    [NUM, NUM, NUM,   LET, LET, LET,   SYM, SYM, SYM],
    [NUM, NUM, NUM,   LET, LET, LET,   SYM, SYM, SYM],
    [NUM, NUM, NUM,   LET, LET, LET,   SYM, SYM, SYM],

    [AC1, AC1, AC1,   AC2, AC2, AC2,   EMO, EMO, EMO],
    [AC1, AC1, AC1,   AC2, AC2, AC2,   EMO, EMO, EMO],
    [AC1, AC1, AC1,   AC2, AC2, AC2,   EMO, EMO, EMO],
]);
