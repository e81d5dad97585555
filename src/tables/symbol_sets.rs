//! Symbol sets and their packed identifiers.

use core::fmt;

use tartan_bitfield::bitfield;

bitfield! {
    struct Packed(u16) {
        [0..5] letter_code: u8,
        [5..16] number: u16,
    }
}

/// A symbol set identifier, packed as an 11-bit number and a 5-bit letter
/// code (the letter less 64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolSetId(u16);

impl SymbolSetId {
    /// Wrap a packed identifier, as stored in font headers.
    pub fn from_packed(packed: u16) -> Self {
        Self(packed)
    }

    /// Build an identifier from its number and letter, as written in escape
    /// sequences (`10U`). Returns `None` if either part is out of range.
    pub fn from_parts(number: u16, letter: u8) -> Option<Self> {
        if number >= 1 << 11 || !(64..96).contains(&letter) {
            return None;
        }
        Some(Self((number << 5) | (letter - 64) as u16))
    }

    pub fn packed(self) -> u16 {
        self.0
    }

    pub fn number(self) -> u16 {
        Packed(self.0).number()
    }

    pub fn letter(self) -> char {
        char::from(Packed(self.0).letter_code() + 64)
    }

    /// Identifiers with the letter `Q` are reserved for specials.
    pub fn is_special(self) -> bool {
        self.letter() == 'Q'
    }
}

impl fmt::Display for SymbolSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number(), self.letter())
    }
}

/// A symbol set table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub number: u16,
    pub letter: u8,
    pub name: &'static str,
}

/// Entry for identifiers absent from the table.
pub const UNKNOWN: SymbolSet = SymbolSet {
    number: 0,
    letter: 0,
    name: "Unknown",
};

/// Entry for unlisted identifiers in the reserved `Q` range.
pub const SPECIALS: SymbolSet = SymbolSet {
    number: 0,
    letter: b'Q',
    name: "Specials",
};

/// Look up a symbol set, falling back to [`SPECIALS`] or [`UNKNOWN`].
pub fn symbol_set(id: SymbolSetId) -> &'static SymbolSet {
    match listed(id) {
        Some(entry) => entry,
        None if id.is_special() => &SPECIALS,
        None => &UNKNOWN,
    }
}

/// Look up a symbol set present in the table.
pub fn listed(id: SymbolSetId) -> Option<&'static SymbolSet> {
    let letter = id.letter() as u8;
    SYMBOL_SETS
        .iter()
        .find(|s| s.number == id.number() && s.letter == letter)
}

macro_rules! symbol_sets {
    ($($number:literal $letter:literal $name:literal),* $(,)?) => {
        /// All known symbol sets.
        pub static SYMBOL_SETS: &[SymbolSet] = &[
            $(SymbolSet { number: $number, letter: $letter, name: $name }),*
        ];
    };
}

symbol_sets! {
    0 b'D' "ISO 60: Danish/Norwegian",
    1 b'D' "ISO 61: Norwegian v2",
    1 b'E' "ISO 4: United Kingdom",
    0 b'F' "ISO 25: French",
    1 b'F' "ISO 69: French",
    0 b'G' "HP German",
    1 b'G' "ISO 21: German",
    0 b'I' "ISO 15: Italian",
    0 b'K' "ISO 14: JIS ASCII",
    6 b'J' "Microsoft Publishing",
    7 b'J' "DeskTop",
    9 b'J' "PC-1004",
    10 b'J' "PS Text",
    14 b'L' "ITC Zapf Dingbats",
    579 b'L' "Wingdings",
    0 b'M' "Math-8",
    5 b'M' "PS Math",
    6 b'M' "Ventura Math",
    19 b'M' "Symbol",
    0 b'N' "ISO 8859-1 Latin 1",
    2 b'N' "ISO 8859-2 Latin 2",
    5 b'N' "ISO 8859-9 Latin 5",
    6 b'N' "ISO 8859-10 Latin 6",
    9 b'N' "ISO 8859-15 Latin 9",
    10 b'N' "ISO 8859-5 Latin/Cyrillic",
    12 b'N' "ISO 8859-7 Latin/Greek",
    18 b'N' "Unicode",
    0 b'O' "OCR-A",
    1 b'O' "OCR-B",
    0 b'S' "ISO 11: Swedish",
    1 b'S' "HP Spanish",
    2 b'S' "ISO 17: Spanish",
    0 b'U' "ISO 6: ASCII",
    1 b'U' "Legal",
    8 b'U' "HP Roman-8",
    9 b'U' "Windows 3.0 Latin 1",
    10 b'U' "PC-8",
    11 b'U' "PC-8 Danish/Norwegian",
    12 b'U' "PC-850",
    13 b'U' "Ventura International",
    15 b'U' "Pi Font",
    17 b'U' "PC-852",
    19 b'U' "Windows 3.1 Latin 1",
    9 b'E' "Windows 3.1 Latin 2",
    5 b'T' "Windows 3.1 Latin 5",
    9 b'T' "PC-Turkish",
    9 b'R' "Windows Latin/Cyrillic",
    9 b'G' "Windows Latin/Greek",
}
