/// Position of the representative sample in an ascending series of `len` values.
///
/// - empty series: no position;
/// - one sample: position 0;
/// - odd count: the exact middle, `len / 2`;
/// - even count: the upper of the two middle elements, `len / 2`. Values are never
///   averaged, so the result is always a sample that was actually measured.
pub fn median_position(len: usize) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        odd if odd % 2 == 1 => Some(odd / 2),
        even => Some(even / 2),
    }
}
