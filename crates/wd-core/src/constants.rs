/// Exponent marker letters recognized in document tokens, in scan order.
/// `D`/`d` are the Fortran double-precision markers, `E`/`e` the generic ones.
pub const EXPONENT_MARKERS: [char; 4] = ['D', 'd', 'E', 'e'];

/// Fractional digits assumed for a scientific token that has no decimal point.
pub const DEFAULT_SCI_PRECISION: usize = 6;

/// Separator placed between tokens when an edited line is rebuilt.
pub const TOKEN_SEPARATOR: &str = "   ";

/// Minimum exponent digits written when a scientific token is rebuilt.
pub const EXPONENT_DIGITS: usize = 2;
