use crate::transition::State;

/// Decode a state into its cell values, leftmost cell (most significant bit) first.
///
/// For `length == 4`, state `2` becomes `[false, false, true, false]`.
pub fn state_to_bits(state: State, length: usize) -> Vec<bool> {
    (0..length)
        .rev()
        .map(|shift| (state >> shift) & 1 == 1)
        .collect()
}

/// Encode a list of cell values (leftmost cell first) into a state.
///
/// This is the inverse of [`state_to_bits`]: `[true, false]` becomes `2`.
pub fn bits_to_state(bits: &[bool]) -> State {
    bits.iter()
        .fold(0, |state, bit| (state << 1) | State::from(*bit))
}
