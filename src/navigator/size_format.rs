const KIB_PER_MIB: u64 = 1024;
const KIB_PER_GIB: u64 = 1024 * 1024;

/// Renders a size given in kibibytes as `KB`, `MB` or `GB` with one decimal
/// for the larger units. Ties round half up, so 1280 KB is `1.3 MB`.
pub fn format_size(size_kib: u64) -> String {
    if size_kib < KIB_PER_MIB {
        format!("{size_kib} KB")
    } else if size_kib < KIB_PER_GIB {
        format!("{} MB", one_decimal(size_kib, KIB_PER_MIB))
    } else {
        format!("{} GB", one_decimal(size_kib, KIB_PER_GIB))
    }
}

/// `size_kib / unit` with one decimal, computed in integer tenths.
fn one_decimal(size_kib: u64, unit: u64) -> String {
    let unit = u128::from(unit);
    let tenths = (u128::from(size_kib) * 10 + unit / 2) / unit;
    format!("{}.{}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, "0 KB")]
    #[case(10, "10 KB")]
    #[case(1023, "1023 KB")]
    #[case(1024, "1.0 MB")]
    #[case(1280, "1.3 MB")]
    #[case(1792, "1.8 MB")]
    #[case(1995, "1.9 MB")]
    #[case(2935, "2.9 MB")]
    #[case(3328, "3.3 MB")]
    #[case(1024 * 1024 - 1, "1024.0 MB")]
    #[case(1024 * 1024, "1.0 GB")]
    #[case(1024 * 1024 + 256 * 1024, "1.3 GB")]
    #[case(3 * 1024 * 1024 + 512 * 1024 + 100, "3.5 GB")]
    #[case(u64::MAX, "17592186044416.0 GB")]
    fn formats_sizes(#[case] size_kib: u64, #[case] expected: &str) {
        assert_eq!(format_size(size_kib), expected);
    }
}
