//! PCL XL attribute identifiers.

/// An attribute table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub id: u16,
    pub name: &'static str,
}

/// Entry for unassigned attribute identifiers.
pub const UNKNOWN: Attribute = Attribute {
    id: u16::MAX,
    name: "Unknown",
};

/// Look up an attribute by identifier.
pub fn attribute(id: u16) -> &'static Attribute {
    ATTRIBUTES
        .binary_search_by_key(&id, |a| a.id)
        .map_or(&UNKNOWN, |i| &ATTRIBUTES[i])
}

/// Whether an identifier has an assigned attribute.
pub fn is_known(id: u16) -> bool {
    ATTRIBUTES.binary_search_by_key(&id, |a| a.id).is_ok()
}

macro_rules! attributes {
    ($($id:literal $name:ident),* $(,)?) => {
        /// All assigned attributes, sorted by identifier.
        pub static ATTRIBUTES: &[Attribute] = &[
            $(Attribute { id: $id, name: stringify!($name) }),*
        ];
    };
}

attributes! {
    2 PaletteDepth,
    3 ColorSpace,
    4 NullBrush,
    5 NullPen,
    6 PaletteData,
    8 PatternSelectID,
    9 GrayLevel,
    11 RGBColor,
    12 PatternOrigin,
    13 NewDestinationSize,
    14 PrimaryArray,
    15 PrimaryDepth,
    33 DeviceMatrix,
    34 DitherMatrixDataType,
    35 DitherOrigin,
    36 MediaDestination,
    37 MediaSize,
    38 MediaSource,
    39 MediaType,
    40 Orientation,
    41 PageAngle,
    42 PageOrigin,
    43 PageScale,
    44 ROP3,
    45 TxMode,
    47 CustomMediaSize,
    48 CustomMediaSizeUnits,
    49 PageCopies,
    50 DitherMatrixSize,
    51 DitherMatrixDepth,
    52 SimplexPageMode,
    53 DuplexPageMode,
    54 DuplexPageSide,
    65 ArcDirection,
    66 BoundingBox,
    67 DashOffset,
    68 EllipseDimension,
    69 EndPoint,
    70 FillMode,
    71 LineCapStyle,
    72 LineJoinStyle,
    73 MiterLength,
    74 LineDashStyle,
    75 PenWidth,
    76 Point,
    77 NumberOfPoints,
    78 SolidLine,
    79 StartPoint,
    80 PointType,
    81 ControlPoint1,
    82 ControlPoint2,
    83 ClipRegion,
    84 ClipMode,
    98 ColorDepth,
    99 BlockHeight,
    100 ColorMapping,
    101 CompressMode,
    102 DestinationBox,
    103 DestinationSize,
    104 PatternPersistence,
    105 PatternDefineID,
    107 SourceHeight,
    108 SourceWidth,
    109 StartLine,
    110 PadBytesMultiple,
    111 BlockByteLength,
    115 NumberOfScanLines,
    120 ColorTreatment,
    129 CommentData,
    130 DataOrg,
    134 Measure,
    136 SourceType,
    137 UnitsPerMeasure,
    138 QueryKey,
    139 StreamName,
    140 StreamDataLength,
    143 ErrorReport,
    145 IOReadTimeOut,
    161 CharAngle,
    162 CharCode,
    163 CharDataSize,
    164 CharScale,
    165 CharShear,
    166 CharSize,
    167 FontHeaderLength,
    168 FontName,
    169 FontFormat,
    170 SymbolSet,
    171 TextData,
    172 CharSubModeArray,
    173 WritingMode,
    175 XSpacingData,
    176 YSpacingData,
    177 CharBoldValue,
}
