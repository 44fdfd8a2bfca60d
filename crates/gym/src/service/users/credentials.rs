use rand::Rng as _;

const PASSWORD_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_LENGTH: usize = 10;

/// `First.Last`, with a numeric suffix when the base name is taken.
pub fn generate_username(
    first_name: &str,
    last_name: &str,
    exists: impl Fn(&str) -> bool,
) -> String {
    let base = format!("{}.{}", first_name.trim(), last_name.trim());
    if !exists(&base) {
        return base;
    }

    let mut counter = 1;
    loop {
        let candidate = format!("{}{}", base, counter);
        if !exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    (0..PASSWORD_LENGTH)
        .map(|_| PASSWORD_CHARS[rng.gen_range(0..PASSWORD_CHARS.len())] as char)
        .collect()
}
