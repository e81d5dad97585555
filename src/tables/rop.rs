//! The 256 raster logical operations (ROP3).
//!
//! An operation combines destination `D`, source `S` and texture `T`; the
//! index is the truth table with `T = 0xF0`, `S = 0xCC` and `D = 0xAA`.
//! Mnemonics use reverse-polish notation, with `a`, `o`, `x` and `n` for and,
//! or, exclusive-or and not.

use LogicalOperation as Rop;

/// A logical operation table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalOperation {
    pub mnemonic: &'static str,
    pub expression: &'static str,
}

impl LogicalOperation {
    const fn new(mnemonic: &'static str, expression: &'static str) -> Self {
        Self {
            mnemonic,
            expression,
        }
    }
}

/// Look up a logical operation by index.
pub fn logical_operation(index: u8) -> &'static LogicalOperation {
    &LOGICAL_OPERATIONS[index as usize]
}

/// All logical operations, by index.
pub static LOGICAL_OPERATIONS: [LogicalOperation; 256] = [
    Rop::new("0", "0"),
    Rop::new("DSToon", "~(D | (S | T))"),
    Rop::new("DSTona", "D & ~(S | T)"),
    Rop::new("STon", "~(S | T)"),
    Rop::new("DTonSa", "~(D | T) & S"),
    Rop::new("DTon", "~(D | T)"),
    Rop::new("DSxTna", "(D ^ S) & ~T"),
    Rop::new("DSaTon", "~(D & S | T)"),
    Rop::new("DSTnaa", "D & (S & ~T)"),
    Rop::new("DSxTon", "~(D ^ S | T)"),
    Rop::new("DTna", "D & ~T"),
    Rop::new("DSnoTna", "(D | ~S) & ~T"),
    Rop::new("STna", "S & ~T"),
    Rop::new("DSnaTon", "~(D & ~S | T)"),
    Rop::new("DSoTna", "(D | S) & ~T"),
    Rop::new("Tn", "~T"),
    Rop::new("DSonTa", "~(D | S) & T"),
    Rop::new("DSon", "~(D | S)"),
    Rop::new("DTxSna", "(D ^ T) & ~S"),
    Rop::new("DTaSon", "~(D & T | S)"),
    Rop::new("DnSTxa", "~D & (S ^ T)"),
    Rop::new("DSTaon", "~(D | S & T)"),
    Rop::new("DDSaSTxox", "D ^ (D & S | S ^ T)"),
    Rop::new("DDSnxSTxox", "D ^ (D ^ ~S | S ^ T)"),
    Rop::new("DTxSTxa", "(D ^ T) & (S ^ T)"),
    Rop::new("DDTaSnox", "D ^ (D & T | ~S)"),
    Rop::new("DSTaoTx", "(D | S & T) ^ T"),
    Rop::new("DSTnxoTx", "(D | S ^ ~T) ^ T"),
    Rop::new("DTaSoTx", "(D & T | S) ^ T"),
    Rop::new("DDTxSanx", "D ^ ~((D ^ T) & S)"),
    Rop::new("DSoTx", "(D | S) ^ T"),
    Rop::new("DSoTan", "~((D | S) & T)"),
    Rop::new("DSnTaa", "D & (~S & T)"),
    Rop::new("DTxSon", "~(D ^ T | S)"),
    Rop::new("DSna", "D & ~S"),
    Rop::new("DTnoSna", "(D | ~T) & ~S"),
    Rop::new("DSxSTxa", "(D ^ S) & (S ^ T)"),
    Rop::new("DDSaTnox", "D ^ (D & S | ~T)"),
    Rop::new("DSTaoSx", "(D | S & T) ^ S"),
    Rop::new("DSTnxoSx", "(D | S ^ ~T) ^ S"),
    Rop::new("DSTxa", "D & (S ^ T)"),
    Rop::new("DSTaoSTnxx", "(D | S & T) ^ (S ^ ~T)"),
    Rop::new("DSTana", "D & ~(S & T)"),
    Rop::new("DDSxDTxonx", "D ^ ~(D ^ S | D ^ T)"),
    Rop::new("DSoSTxa", "(D | S) & (S ^ T)"),
    Rop::new("DnSoTx", "(~D | S) ^ T"),
    Rop::new("DSoSTax", "(D | S) ^ S & T"),
    Rop::new("DSnaTno", "D & ~S | ~T"),
    Rop::new("SnTa", "~S & T"),
    Rop::new("DTnaSon", "~(D & ~T | S)"),
    Rop::new("DToSna", "(D | T) & ~S"),
    Rop::new("Sn", "~S"),
    Rop::new("DSaToSx", "(D & S | T) ^ S"),
    Rop::new("DDSxTanx", "D ^ ~((D ^ S) & T)"),
    Rop::new("DToSx", "(D | T) ^ S"),
    Rop::new("DToSan", "~((D | T) & S)"),
    Rop::new("DToSTxa", "(D | T) & (S ^ T)"),
    Rop::new("DnToSx", "(~D | T) ^ S"),
    Rop::new("DSxToSx", "(D ^ S | T) ^ S"),
    Rop::new("DTnaSno", "D & ~T | ~S"),
    Rop::new("STx", "S ^ T"),
    Rop::new("DSonSTxo", "~(D | S) | S ^ T"),
    Rop::new("DSnaSTxo", "D & ~S | S ^ T"),
    Rop::new("STan", "~(S & T)"),
    Rop::new("DnSTaa", "~D & (S & T)"),
    Rop::new("DSTxon", "~(D | S ^ T)"),
    Rop::new("DSxDTxa", "(D ^ S) & (D ^ T)"),
    Rop::new("DSaSTxon", "~(D & S | S ^ T)"),
    Rop::new("DnSa", "~D & S"),
    Rop::new("DSnTaon", "~(D | ~S & T)"),
    Rop::new("DDTaSox", "D ^ (D & T | S)"),
    Rop::new("DDTnxSox", "D ^ (D ^ ~T | S)"),
    Rop::new("DTxSa", "(D ^ T) & S"),
    Rop::new("DDTaSTnxox", "D ^ (D & T | S ^ ~T)"),
    Rop::new("DDSoTax", "D ^ (D | S) & T"),
    Rop::new("DSnoTx", "(D | ~S) ^ T"),
    Rop::new("DTanSa", "~(D & T) & S"),
    Rop::new("DDSxDTnxox", "D ^ (D ^ S | D ^ ~T)"),
    Rop::new("DSTxoTx", "(D | S ^ T) ^ T"),
    Rop::new("DSnoTan", "~((D | ~S) & T)"),
    Rop::new("DnTa", "~D & T"),
    Rop::new("DSTnaon", "~(D | S & ~T)"),
    Rop::new("DDSaTox", "D ^ (D & S | T)"),
    Rop::new("DDSnxTox", "D ^ (D ^ ~S | T)"),
    Rop::new("DnSToa", "~D & (S | T)"),
    Rop::new("Dn", "~D"),
    Rop::new("DSTox", "D ^ (S | T)"),
    Rop::new("DSToan", "~(D & (S | T))"),
    Rop::new("DSToaTx", "D & (S | T) ^ T"),
    Rop::new("DSnTox", "D ^ (~S | T)"),
    Rop::new("DTx", "D ^ T"),
    Rop::new("DDSonTox", "D ^ (~(D | S) | T)"),
    Rop::new("DDSxTox", "D ^ (D ^ S | T)"),
    Rop::new("DSnToan", "~(D & (~S | T))"),
    Rop::new("DDnSaTox", "D ^ (~D & S | T)"),
    Rop::new("DTan", "~(D & T)"),
    Rop::new("DSxTa", "(D ^ S) & T"),
    Rop::new("DDSaSTnxox", "D ^ (D & S | S ^ ~T)"),
    Rop::new("DDToSax", "D ^ (D | T) & S"),
    Rop::new("DTnoSx", "(D | ~T) ^ S"),
    Rop::new("DSToaSx", "D & (S | T) ^ S"),
    Rop::new("DSTnox", "D ^ (S | ~T)"),
    Rop::new("DSx", "D ^ S"),
    Rop::new("DDTonSox", "D ^ (~(D | T) | S)"),
    Rop::new("DSTaxSToa", "(D ^ S & T) & (S | T)"),
    Rop::new("DSTnxx", "D ^ (S ^ ~T)"),
    Rop::new("DSTax", "D ^ S & T"),
    Rop::new("DSTaxSTono", "D ^ S & T | ~(S | T)"),
    Rop::new("DTaSx", "D & T ^ S"),
    Rop::new("DDToSTxanx", "D ^ ~((D | T) & (S ^ T))"),
    Rop::new("DDnToSax", "D ^ (~D | T) & S"),
    Rop::new("DSxTno", "D ^ S | ~T"),
    Rop::new("DSanTa", "~(D & S) & T"),
    Rop::new("DDSnxDTxox", "D ^ (D ^ ~S | D ^ T)"),
    Rop::new("DSTxoSx", "(D | S ^ T) ^ S"),
    Rop::new("DTnoSan", "~((D | ~T) & S)"),
    Rop::new("DDTxSox", "D ^ (D ^ T | S)"),
    Rop::new("DSTnoan", "~(D & (S | ~T))"),
    Rop::new("DDnTaSox", "D ^ (~D & T | S)"),
    Rop::new("DSan", "~(D & S)"),
    Rop::new("DSaTx", "D & S ^ T"),
    Rop::new("DDSoSTxanx", "D ^ ~((D | S) & (S ^ T))"),
    Rop::new("DDnSoTax", "D ^ (~D | S) & T"),
    Rop::new("DTxSno", "D ^ T | ~S"),
    Rop::new("DSnoTaSx", "(D | ~S) & T ^ S"),
    Rop::new("DnSTxo", "~D | S ^ T"),
    Rop::new("DSxDTxo", "D ^ S | D ^ T"),
    Rop::new("DSTaan", "~(D & (S & T))"),
    Rop::new("DSTaa", "D & (S & T)"),
    Rop::new("DSxDTxon", "~(D ^ S | D ^ T)"),
    Rop::new("DSTnxa", "D & (S ^ ~T)"),
    Rop::new("DSnoSTnxa", "(D | ~S) & (S ^ ~T)"),
    Rop::new("DTnxSa", "(D ^ ~T) & S"),
    Rop::new("DDSnaTnox", "D ^ (D & ~S | ~T)"),
    Rop::new("DDSoSTxax", "D ^ (D | S) & (S ^ T)"),
    Rop::new("DSaTnx", "D & S ^ ~T"),
    Rop::new("DSa", "D & S"),
    Rop::new("DDTnoSnax", "D ^ (D | ~T) & ~S"),
    Rop::new("DSTnoa", "D & (S | ~T)"),
    Rop::new("DDTxSonx", "D ^ ~(D ^ T | S)"),
    Rop::new("DTnoSa", "(D | ~T) & S"),
    Rop::new("DSTxoSnx", "(D | S ^ T) ^ ~S"),
    Rop::new("DDSxSTxax", "D ^ (D ^ S) & (S ^ T)"),
    Rop::new("DSaTno", "D & S | ~T"),
    Rop::new("DSnxTa", "(D ^ ~S) & T"),
    Rop::new("DDTnaSnox", "D ^ (D & ~T | ~S)"),
    Rop::new("DDToSTxax", "D ^ (D | T) & (S ^ T)"),
    Rop::new("DTaSnx", "D & T ^ ~S"),
    Rop::new("DSToaSTxx", "D & (S | T) ^ (S ^ T)"),
    Rop::new("DSTanx", "D ^ ~(S & T)"),
    Rop::new("DSTxx", "D ^ (S ^ T)"),
    Rop::new("DDSonSTxox", "D ^ (~(D | S) | S ^ T)"),
    Rop::new("DDToSnax", "D ^ (D | T) & ~S"),
    Rop::new("DSnx", "D ^ ~S"),
    Rop::new("DSnTax", "D ^ ~S & T"),
    Rop::new("DSToaSnx", "D & (S | T) ^ ~S"),
    Rop::new("DnTaSx", "~D & T ^ S"),
    Rop::new("DDToSanx", "D ^ ~((D | T) & S)"),
    Rop::new("DDSaToSxx", "D ^ ((D & S | T) ^ S)"),
    Rop::new("DSxTan", "~((D ^ S) & T)"),
    Rop::new("DTa", "D & T"),
    Rop::new("DDSnoTnax", "D ^ (D | ~S) & ~T"),
    Rop::new("DSnToa", "D & (~S | T)"),
    Rop::new("DDSxTonx", "D ^ ~(D ^ S | T)"),
    Rop::new("DDSoTnax", "D ^ (D | S) & ~T"),
    Rop::new("DTnx", "D ^ ~T"),
    Rop::new("DSTnax", "D ^ S & ~T"),
    Rop::new("DSToaTnx", "D & (S | T) ^ ~T"),
    Rop::new("DSToa", "D & (S | T)"),
    Rop::new("DSTonx", "D ^ ~(S | T)"),
    Rop::new("D", "D"),
    Rop::new("DSTono", "D | ~(S | T)"),
    Rop::new("DSxTaSx", "(D ^ S) & T ^ S"),
    Rop::new("DDSaTonx", "D ^ ~(D & S | T)"),
    Rop::new("DSTnao", "D | S & ~T"),
    Rop::new("DTno", "D | ~T"),
    Rop::new("DSnoTa", "(D | ~S) & T"),
    Rop::new("DSTxoTnx", "(D | S ^ T) ^ ~T"),
    Rop::new("DDTxSTxax", "D ^ (D ^ T) & (S ^ T)"),
    Rop::new("DTaSno", "D & T | ~S"),
    Rop::new("DnSaTx", "~D & S ^ T"),
    Rop::new("DDSoTanx", "D ^ ~((D | S) & T)"),
    Rop::new("DDTaSoTxx", "D ^ ((D & T | S) ^ T)"),
    Rop::new("DTxSan", "~((D ^ T) & S)"),
    Rop::new("DTxSaTx", "(D ^ T) & S ^ T"),
    Rop::new("DDTaSonx", "D ^ ~(D & T | S)"),
    Rop::new("DSnTao", "D | ~S & T"),
    Rop::new("DSno", "D | ~S"),
    Rop::new("DSaSTxo", "D & S | S ^ T"),
    Rop::new("DSnxSTxo", "D ^ ~S | S ^ T"),
    Rop::new("DSTxo", "D | S ^ T"),
    Rop::new("DSTano", "D | ~(S & T)"),
    Rop::new("STa", "S & T"),
    Rop::new("DSnaSTxon", "~(D & ~S | S ^ T)"),
    Rop::new("DSoSTnxa", "(D | S) & (S ^ ~T)"),
    Rop::new("STnx", "S ^ ~T"),
    Rop::new("DnToSa", "(~D | T) & S"),
    Rop::new("DDSxTnox", "D ^ (D ^ S | ~T)"),
    Rop::new("DTnaSx", "D & ~T ^ S"),
    Rop::new("DToSTxan", "~((D | T) & (S ^ T))"),
    Rop::new("DToSa", "(D | T) & S"),
    Rop::new("DToSnx", "(D | T) ^ ~S"),
    Rop::new("DDSxTax", "D ^ (D ^ S) & T"),
    Rop::new("DSaSTnxo", "D & S | S ^ ~T"),
    Rop::new("S", "S"),
    Rop::new("DTonSo", "~(D | T) | S"),
    Rop::new("DTnaSo", "D & ~T | S"),
    Rop::new("STno", "S | ~T"),
    Rop::new("DnSoTa", "(~D | S) & T"),
    Rop::new("DDTxSnox", "D ^ (D ^ T | ~S)"),
    Rop::new("DSnaTx", "D & ~S ^ T"),
    Rop::new("DSoSTxan", "~((D | S) & (S ^ T))"),
    Rop::new("DDSxDTxox", "D ^ (D ^ S | D ^ T)"),
    Rop::new("DnSTao", "~D | S & T"),
    Rop::new("DSTaoSTxx", "(D | S & T) ^ (S ^ T)"),
    Rop::new("DSTxan", "~(D & (S ^ T))"),
    Rop::new("DSTxaTx", "D & (S ^ T) ^ T"),
    Rop::new("DSTaoSnx", "(D | S & T) ^ ~S"),
    Rop::new("DSaDTxo", "D & S | D ^ T"),
    Rop::new("DSnxDTxo", "D ^ ~S | D ^ T"),
    Rop::new("DnTaSo", "~D & T | S"),
    Rop::new("DnSo", "~D | S"),
    Rop::new("DTxSo", "D ^ T | S"),
    Rop::new("DTanSo", "~(D & T) | S"),
    Rop::new("DSoTa", "(D | S) & T"),
    Rop::new("DSoTnx", "(D | S) ^ ~T"),
    Rop::new("DDTxSax", "D ^ (D ^ T) & S"),
    Rop::new("DTaSTnxo", "D & T | S ^ ~T"),
    Rop::new("DSTxaSx", "D & (S ^ T) ^ S"),
    Rop::new("DSTaoTnx", "(D | S & T) ^ ~T"),
    Rop::new("DSxDTao", "D ^ S | D & T"),
    Rop::new("DSxDTnxo", "D ^ S | D ^ ~T"),
    Rop::new("DDSxDTxax", "D ^ (D ^ S) & (D ^ T)"),
    Rop::new("DDSaSTxonx", "D ^ ~(D & S | S ^ T)"),
    Rop::new("DSTao", "D | S & T"),
    Rop::new("DSTnxo", "D | S ^ ~T"),
    Rop::new("DTaSo", "D & T | S"),
    Rop::new("DTnxSo", "D ^ ~T | S"),
    Rop::new("DSo", "D | S"),
    Rop::new("DSTnoo", "D | (S | ~T)"),
    Rop::new("T", "T"),
    Rop::new("DSonTo", "~(D | S) | T"),
    Rop::new("DSnaTo", "D & ~S | T"),
    Rop::new("SnTo", "~S | T"),
    Rop::new("DnSaTo", "~D & S | T"),
    Rop::new("DnTo", "~D | T"),
    Rop::new("DSxTo", "D ^ S | T"),
    Rop::new("DSanTo", "~(D & S) | T"),
    Rop::new("DSaTo", "D & S | T"),
    Rop::new("DSnxTo", "D ^ ~S | T"),
    Rop::new("DTo", "D | T"),
    Rop::new("DSnToo", "D | (~S | T)"),
    Rop::new("STo", "S | T"),
    Rop::new("DnSToo", "~D | (S | T)"),
    Rop::new("DSToo", "D | (S | T)"),
    Rop::new("1", "1"),
];
