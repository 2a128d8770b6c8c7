/// Digits in a national citizen id.
pub const CITIZEN_ID_LENGTH: usize = 13;

pub fn is_valid_citizen_id(citizen_id: &str) -> bool {
    citizen_id.len() == CITIZEN_ID_LENGTH && citizen_id.bytes().all(|b| b.is_ascii_digit())
}
