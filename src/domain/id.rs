use std::{borrow::Borrow, fmt::Display};

/// Length of generated ids when nothing else is configured.
pub const DEFAULT_ID_LEN: usize = 4;

const MAX_ID_LEN: usize = blake3::OUT_LEN * 2;

/// After this many collisions at one length, generated ids grow by one hex digit.
const ATTEMPTS_PER_LEN: u64 = 256;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a track, unique among tracks
    TrackId
);

string_id!(
    /// Identifier of a playlist, unique among playlists
    PlaylistId
);

/// Derives a short lowercase hex id from `seed`.
///
/// The id is a prefix of `blake3(seed || attempt)`. Attempts are retried while
/// `is_taken` reports a collision, so the result is unique within whatever
/// collection `is_taken` checks, and the same catalog state always yields the same id.
pub fn generate_id(seed: &str, len: usize, is_taken: impl Fn(&str) -> bool) -> String {
    let mut len = len.clamp(1, MAX_ID_LEN);
    let mut attempt: u64 = 0;

    loop {
        let mut hasher = blake3::Hasher::new();
        hasher.update(seed.as_bytes());
        hasher.update(&attempt.to_le_bytes());
        let hex = hasher.finalize().to_hex();
        let candidate = &hex.as_str()[..len];

        if !is_taken(candidate) {
            return candidate.to_string();
        }

        attempt += 1;
        if attempt % ATTEMPTS_PER_LEN == 0 && len < MAX_ID_LEN {
            len += 1;
        }
    }
}
