//! PCL 5 escape sequences.
//!
//! Parameterised sequences are keyed by their parameterised character,
//! group character and upper-case terminator. Two-character sequences have
//! neither group nor terminator, and are keyed by their single operation
//! character.

/// Group or terminator slot left empty.
pub const NONE: u8 = 0;

/// Terminator slot matching any upper-case letter.
const ANY: u8 = 0xFF;

/// What the decoder does beyond recording a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Plain,
    /// The value field counts bytes of binary data following the sequence.
    Payload { label: &'static str, raster: bool },
    /// `ESC&f#X`; values 0 and 1 open and close a macro definition.
    MacroControl,
    /// Designates a symbol set by number and terminator letter.
    SymbolSet,
    /// Selects one of the 256 logical operations.
    LogicalOperation,
    /// Universal Exit Language, returning control to PJL.
    UniversalExit,
}

/// An escape sequence table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    pub prefix: u8,
    pub group: u8,
    pub terminator: u8,
    pub name: &'static str,
    pub action: Action,
}

/// Entry for sequences absent from the table.
pub const UNKNOWN: Sequence = Sequence {
    prefix: NONE,
    group: NONE,
    terminator: NONE,
    name: "Unknown sequence",
    action: Action::Plain,
};

/// Look up a sequence, returning its table index if known.
///
/// Lower-case (combined) terminators are folded before matching.
pub fn sequence(prefix: u8, group: u8, terminator: u8) -> (Option<u16>, &'static Sequence) {
    let terminator = terminator.to_ascii_uppercase();

    let exact = SEQUENCES
        .iter()
        .position(|s| s.prefix == prefix && s.group == group && s.terminator == terminator);

    let found = exact.or_else(|| {
        if !terminator.is_ascii_uppercase() {
            return None;
        }
        SEQUENCES
            .iter()
            .position(|s| s.prefix == prefix && s.group == group && s.terminator == ANY)
    });

    match found {
        Some(i) => (Some(i as u16), &SEQUENCES[i]),
        None => (None, &UNKNOWN),
    }
}

/// Look up a sequence by table index.
pub fn entry(index: u16) -> &'static Sequence {
    SEQUENCES.get(index as usize).unwrap_or(&UNKNOWN)
}

const fn s(prefix: u8, group: u8, terminator: u8, name: &'static str) -> Sequence {
    a(prefix, group, terminator, name, Action::Plain)
}

const fn a(prefix: u8, group: u8, terminator: u8, name: &'static str, action: Action) -> Sequence {
    Sequence {
        prefix,
        group,
        terminator,
        name,
        action,
    }
}

const fn w(
    prefix: u8,
    group: u8,
    terminator: u8,
    name: &'static str,
    label: &'static str,
    raster: bool,
) -> Sequence {
    a(
        prefix,
        group,
        terminator,
        name,
        Action::Payload { label, raster },
    )
}

/// All known sequences.
pub static SEQUENCES: &[Sequence] = &[
    s(b'E', NONE, NONE, "Printer reset"),
    s(b'9', NONE, NONE, "Clear horizontal margins"),
    s(b'=', NONE, NONE, "Half line feed"),
    s(b'Y', NONE, NONE, "Display functions on"),
    s(b'Z', NONE, NONE, "Display functions off"),
    s(b'z', NONE, NONE, "Self test"),
    a(
        b'%',
        NONE,
        b'X',
        "Universal exit language",
        Action::UniversalExit,
    ),
    s(b'%', NONE, b'A', "Enter PCL mode"),
    s(b'%', NONE, b'B', "Enter HP-GL/2 mode"),
    s(b'&', b'l', b'A', "Page size"),
    s(b'&', b'l', b'C', "Vertical motion index"),
    s(b'&', b'l', b'D', "Line spacing"),
    s(b'&', b'l', b'E', "Top margin"),
    s(b'&', b'l', b'F', "Text length"),
    s(b'&', b'l', b'G', "Output bin"),
    s(b'&', b'l', b'H', "Paper source"),
    s(b'&', b'l', b'L', "Perforation skip"),
    s(b'&', b'l', b'M', "Media type"),
    s(b'&', b'l', b'O', "Orientation"),
    s(b'&', b'l', b'P', "Page length"),
    s(b'&', b'l', b'S', "Simplex/duplex print"),
    s(b'&', b'l', b'T', "Job separation"),
    s(b'&', b'l', b'U', "Left offset registration"),
    s(b'&', b'l', b'X', "Number of copies"),
    s(b'&', b'l', b'Z', "Top offset registration"),
    s(b'&', b'a', b'C', "Horizontal cursor position (columns)"),
    s(b'&', b'a', b'G', "Duplex page side"),
    s(b'&', b'a', b'H', "Horizontal cursor position (decipoints)"),
    s(b'&', b'a', b'L', "Left margin"),
    s(b'&', b'a', b'M', "Right margin"),
    s(b'&', b'a', b'P', "Print direction"),
    s(b'&', b'a', b'R', "Vertical cursor position (rows)"),
    s(b'&', b'a', b'V', "Vertical cursor position (decipoints)"),
    s(b'&', b'd', b'D', "Underline on"),
    s(b'&', b'd', b'@', "Underline off"),
    s(b'&', b'f', b'S', "Push/pop cursor position"),
    s(b'&', b'f', b'Y', "Macro ID"),
    a(b'&', b'f', b'X', "Macro control", Action::MacroControl),
    s(b'&', b'k', b'G', "Line termination"),
    s(b'&', b'k', b'H', "Horizontal motion index"),
    s(b'&', b'k', b'S', "Pitch mode"),
    w(
        b'&',
        b'n',
        b'W',
        "Alphanumeric ID",
        "alphanumeric ID data",
        false,
    ),
    w(
        b'&',
        b'p',
        b'X',
        "Transparent print data",
        "transparent print data",
        false,
    ),
    s(b'&', b'p', b'C', "Palette control"),
    s(b'&', b'r', b'F', "Flush all pages"),
    s(b'&', b's', b'C', "End-of-line wrap"),
    s(b'&', b'u', b'D', "Unit of measure"),
    w(
        b'&',
        b'b',
        b'W',
        "AppleTalk configuration",
        "configuration data",
        false,
    ),
    a(b'(', NONE, ANY, "Primary symbol set", Action::SymbolSet),
    a(b')', NONE, ANY, "Secondary symbol set", Action::SymbolSet),
    s(b'(', NONE, b'X', "Primary font selection by ID"),
    s(b')', NONE, b'X', "Secondary font selection by ID"),
    s(b'(', NONE, b'@', "Primary default font"),
    s(b')', NONE, b'@', "Secondary default font"),
    s(b'(', b's', b'P', "Primary spacing"),
    s(b'(', b's', b'H', "Primary pitch"),
    s(b'(', b's', b'V', "Primary height"),
    s(b'(', b's', b'S', "Primary style"),
    s(b'(', b's', b'B', "Primary stroke weight"),
    s(b'(', b's', b'T', "Primary typeface"),
    w(
        b'(', b's', b'W', "Character download", "character data", false,
    ),
    s(b')', b's', b'P', "Secondary spacing"),
    s(b')', b's', b'H', "Secondary pitch"),
    s(b')', b's', b'V', "Secondary height"),
    s(b')', b's', b'S', "Secondary style"),
    s(b')', b's', b'B', "Secondary stroke weight"),
    s(b')', b's', b'T', "Secondary typeface"),
    w(
        b')', b's', b'W', "Font header download", "font header data", false,
    ),
    s(b'*', b'c', b'A', "Horizontal rectangle size (dots)"),
    s(b'*', b'c', b'B', "Vertical rectangle size (dots)"),
    s(b'*', b'c', b'D', "Font ID"),
    s(b'*', b'c', b'E', "Character code"),
    s(b'*', b'c', b'F', "Font control"),
    s(b'*', b'c', b'G', "Area fill ID"),
    s(b'*', b'c', b'H', "Horizontal rectangle size (decipoints)"),
    s(b'*', b'c', b'P', "Fill rectangular area"),
    s(b'*', b'c', b'Q', "Pattern control"),
    s(b'*', b'c', b'V', "Vertical rectangle size (decipoints)"),
    w(b'*', b'c', b'W', "Download pattern", "pattern data", true),
    s(b'*', b'c', b'X', "Picture frame horizontal size"),
    s(b'*', b'c', b'Y', "Picture frame vertical size"),
    s(b'*', b'p', b'X', "Horizontal cursor position (dots)"),
    s(b'*', b'p', b'Y', "Vertical cursor position (dots)"),
    s(b'*', b'p', b'R', "Pattern reference point"),
    s(b'*', b't', b'R', "Raster resolution"),
    s(b'*', b'r', b'A', "Start raster graphics"),
    s(b'*', b'r', b'B', "End raster graphics"),
    s(b'*', b'r', b'C', "End raster graphics"),
    s(b'*', b'r', b'F', "Raster presentation mode"),
    s(b'*', b'r', b'S', "Raster source width"),
    s(b'*', b'r', b'T', "Raster source height"),
    s(b'*', b'r', b'U', "Simple colour"),
    s(b'*', b'b', b'M', "Raster compression method"),
    s(b'*', b'b', b'Y', "Raster Y offset"),
    w(
        b'*',
        b'b',
        b'W',
        "Transfer raster data by row",
        "raster data",
        true,
    ),
    w(
        b'*',
        b'b',
        b'V',
        "Transfer raster data by plane",
        "raster data",
        true,
    ),
    w(
        b'*',
        b'v',
        b'W',
        "Configure image data",
        "image configuration data",
        false,
    ),
    s(b'*', b'v', b'A', "Colour component one"),
    s(b'*', b'v', b'B', "Colour component two"),
    s(b'*', b'v', b'C', "Colour component three"),
    s(b'*', b'v', b'I', "Assign colour index"),
    s(b'*', b'v', b'N', "Source transparency mode"),
    s(b'*', b'v', b'O', "Pattern transparency mode"),
    s(b'*', b'v', b'S', "Foreground colour"),
    s(b'*', b'v', b'T', "Select current pattern"),
    a(
        b'*',
        b'l',
        b'O',
        "Logical operation",
        Action::LogicalOperation,
    ),
    s(b'*', b'l', b'R', "Pixel placement"),
    w(
        b'*',
        b'm',
        b'W',
        "Download dither matrix",
        "dither matrix data",
        false,
    ),
    w(
        b'*',
        b'o',
        b'W',
        "Driver configuration",
        "driver configuration data",
        false,
    ),
];
