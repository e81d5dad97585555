use prnscope::tables::{
    self, BaseType, Shape, SymbolSetId, TagKind, attributes, logical_operation,
    rop::LOGICAL_OPERATIONS,
    sequences::{self, Action, NONE},
    symbol_set, symbol_sets,
};

#[test]
fn every_tag_byte_is_classified() {
    assert_eq!(tables::tag(0x41).name, "BeginSession");
    assert_eq!(
        tables::tag(0x29).kind,
        TagKind::Binding(tables::Binding::BigEndian)
    );
    assert_eq!(
        tables::tag(0xC8).kind,
        TagKind::DataType(BaseType::UByte, Shape::Array)
    );
    assert_eq!(tables::tag(0xF9).kind, TagKind::AttributeId { width: 2 });
    assert_eq!(tables::tag(0xFB).kind, TagKind::EmbeddedData { width: 1 });

    for b in [0x01, 0x45, 0x87, 0x90, 0xFF] {
        assert_eq!(tables::tag(b).kind, TagKind::Reserved, "0x{b:02X}");
    }

    for b in 0..=255 {
        let tag = tables::tag(b);
        let is_reserved = tag.kind == TagKind::Reserved;
        assert_eq!(is_reserved, tag.name == "Unknown", "0x{b:02X}");
    }
}

#[test]
fn base_types() {
    assert_eq!(BaseType::Real32.format(&[0, 0, 0xC0, 0x3F], true), "1.5");
    assert_eq!(BaseType::SInt32.format(&[0xFF; 4], false), "-1");
    assert_eq!(BaseType::UInt16.format_all(&[1, 0, 2, 0], true, " "), "1 2");
    assert_eq!(BaseType::UInt32.format(&[0, 0, 1, 0], false), "256");
    assert_eq!(BaseType::UInt32.format(&[0, 0, 1, 0], true), "65536");
    assert_eq!(BaseType::SInt16.format(&[0xFE, 0xFF], true), "-2");
    assert_eq!(
        BaseType::SInt32.format(&[0x80, 0, 0, 0], false),
        "-2147483648"
    );
    assert_eq!(BaseType::Real32.format(&[0xBF, 0x80, 0, 0], false), "-1");
    assert_eq!(BaseType::UByte.format(&[0xFF], false), "255");
}

#[test]
fn logical_operations_evaluate_to_their_index() {
    assert_eq!(LOGICAL_OPERATIONS.len(), 256);

    for (i, rop) in LOGICAL_OPERATIONS.iter().enumerate() {
        assert_eq!(evaluate_rpn(rop.mnemonic), i as u8, "{}", rop.mnemonic);
        let infix = Infix::new(rop.expression).evaluate();
        assert_eq!(infix, i as u8, "{}", rop.expression);
    }

    assert_eq!(logical_operation(0xCC).mnemonic, "S");
    assert_eq!(logical_operation(0x5A).expression, "D ^ T");
}

const D: u8 = 0xAA;
const S: u8 = 0xCC;
const T: u8 = 0xF0;

fn operand(c: char) -> Option<u8> {
    match c {
        'D' => Some(D),
        'S' => Some(S),
        'T' => Some(T),
        '0' => Some(0x00),
        '1' => Some(0xFF),
        _ => None,
    }
}

fn evaluate_rpn(mnemonic: &str) -> u8 {
    let mut stack = Vec::new();

    for c in mnemonic.chars() {
        if let Some(v) = operand(c) {
            stack.push(v);
            continue;
        }
        if c == 'n' {
            let v = stack.pop().unwrap();
            stack.push(!v);
            continue;
        }
        let b = stack.pop().unwrap();
        let a = stack.pop().unwrap();
        stack.push(match c {
            'a' => a & b,
            'o' => a | b,
            'x' => a ^ b,
            _ => panic!("unexpected {c}"),
        });
    }

    assert_eq!(stack.len(), 1);
    stack[0]
}

/// Evaluates `~`, `&`, `^` and `|`, binding in that order.
struct Infix(Vec<char>, usize);

impl Infix {
    fn new(expression: &str) -> Self {
        Self(expression.chars().filter(|c| *c != ' ').collect(), 0)
    }

    fn evaluate(mut self) -> u8 {
        let v = self.or();
        assert_eq!(self.1, self.0.len());
        v
    }

    fn peek(&self) -> Option<char> {
        self.0.get(self.1).copied()
    }

    fn next(&mut self) -> char {
        self.1 += 1;
        self.0[self.1 - 1]
    }

    fn primary(&mut self) -> u8 {
        match self.next() {
            '~' => !self.primary(),
            '(' => {
                let v = self.or();
                assert_eq!(self.next(), ')');
                v
            }
            c => operand(c).unwrap(),
        }
    }

    fn and(&mut self) -> u8 {
        let mut v = self.primary();
        while self.peek() == Some('&') {
            self.next();
            v &= self.primary();
        }
        v
    }

    fn xor(&mut self) -> u8 {
        let mut v = self.and();
        while self.peek() == Some('^') {
            self.next();
            v ^= self.and();
        }
        v
    }

    fn or(&mut self) -> u8 {
        let mut v = self.xor();
        while self.peek() == Some('|') {
            self.next();
            v |= self.xor();
        }
        v
    }
}

#[test]
fn symbol_set_identifiers() {
    let id = SymbolSetId::from_parts(10, b'U').unwrap();
    assert_eq!(id.packed(), 341);
    assert_eq!(id.to_string(), "10U");
    assert_eq!(symbol_set(id).name, "PC-8");

    assert_eq!(SymbolSetId::from_packed(325).to_string(), "10E");
    assert_eq!(SymbolSetId::from_parts(2048, b'U'), None);
    assert_eq!(SymbolSetId::from_parts(1, b'a'), None);

    let wingdings = SymbolSetId::from_parts(579, b'L').unwrap();
    assert_eq!(symbol_set(wingdings).name, "Wingdings");

    let special = SymbolSetId::from_parts(2, b'Q').unwrap();
    assert!(special.is_special());
    assert_eq!(symbol_set(special).name, symbol_sets::SPECIALS.name);

    let unknown = SymbolSetId::from_parts(2000, b'Z').unwrap();
    assert_eq!(symbol_set(unknown).name, symbol_sets::UNKNOWN.name);
}

#[test]
fn attribute_lookup() {
    assert!(attributes::ATTRIBUTES.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(attributes::attribute(44).name, "ROP3");
    assert_eq!(attributes::attribute(37).name, "MediaSize");
    assert_eq!(attributes::attribute(1), &attributes::UNKNOWN);
    assert!(!attributes::is_known(1));
}

#[test]
fn sequence_lookup() {
    let (index, entry) = sequences::sequence(b'&', b'l', b'o');
    assert_eq!(entry.name, "Orientation");
    assert_eq!(sequences::entry(index.unwrap()), entry);

    let (_, entry) = sequences::sequence(b'(', NONE, b'N');
    assert_eq!(entry.action, Action::SymbolSet);

    let (_, entry) = sequences::sequence(b'(', NONE, b'X');
    assert_eq!(entry.name, "Primary font selection by ID");

    let (_, entry) = sequences::sequence(b'*', b'b', b'W');
    assert_eq!(
        entry.action,
        Action::Payload {
            label: "raster data",
            raster: true
        }
    );

    let (index, entry) = sequences::sequence(b'&', b'k', b'Z');
    assert_eq!(index, None);
    assert_eq!(entry, &sequences::UNKNOWN);
}
