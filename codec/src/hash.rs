//! Authentication hashes required by the level server.
//!
//! Both salts are fixed by the server protocol.

use md5::{Digest, Md5};

/// Salt appended to the course hash input.
pub const COURSE_HASH_SALT: &str = "84ge5tnr";

/// Salt appended to the password hash input.
pub const PASS_HASH_SALT: &str = "WGZSL3JWcUE9L3Q4YipZIQ==";

/// Length of a hex-encoded hash.
pub const HASH_HEX_LEN: usize = 32;

/// Computes the course hash: `md5(title + lowercase(user) + data + salt)`.
#[must_use]
pub fn course_hash(title: &str, user: &str, data: &str) -> String {
    md5_hex(&[title, &user.to_lowercase(), data, COURSE_HASH_SALT])
}

/// Computes the password hash, or `None` when there is no password.
///
/// `*` characters are placeholders and are stripped before hashing.
#[must_use]
pub fn pass_hash(pass: &str) -> Option<String> {
    let pass: String = pass.chars().filter(|ch| *ch != '*').collect();
    if pass.is_empty() {
        return None;
    }
    Some(md5_hex(&[&pass, PASS_HASH_SALT]))
}

fn md5_hex(parts: &[&str]) -> String {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_hash_is_stable() {
        let data = "m3`bbbbdd`````````-1";
        assert_eq!(course_hash("abc", "OXY", data), course_hash("abc", "OXY", data));
    }

    #[test]
    fn course_hash_golden() {
        assert_eq!(
            course_hash("abc", "OXY", "m3`bbbbdd`````````-1"),
            "f765cd31ca4fee9c82c8cdb96e95026a"
        );
        assert_eq!(course_hash("", "", ""), "32f5eb735f8cc920d9f16bfbfd7211d4");
    }

    #[test]
    fn course_hash_lowercases_user() {
        assert_eq!(course_hash("t", "OXY", "d"), course_hash("t", "oxy", "d"));
    }

    #[test]
    fn course_hash_changes_with_each_input() {
        let base = course_hash("abc", "oxy", "m3");
        assert_ne!(base, course_hash("abd", "oxy", "m3"));
        assert_ne!(base, course_hash("abc", "oxz", "m3"));
        assert_ne!(base, course_hash("abc", "oxy", "m2"));
        assert_eq!(base.len(), HASH_HEX_LEN);
    }

    #[test]
    fn pass_hash_golden() {
        assert_eq!(
            pass_hash("hunter2").as_deref(),
            Some("418b7f51d3ca7c2e2365aa199f3dea26")
        );
    }

    #[test]
    fn pass_hash_strips_placeholders() {
        assert_eq!(pass_hash("hun*ter2**"), pass_hash("hunter2"));
        assert_eq!(pass_hash("****"), None);
        assert_eq!(pass_hash(""), None);
    }
}
