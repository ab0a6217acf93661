/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client-generated idempotency tokens, such as Cloud Map's `CreatorRequestId`.

use std::sync::Mutex;

/// Format 128 random bits as a version 4 UUID (`xxxxxxxx-xxxx-4xxx-Nxxx-xxxxxxxxxxxx`)
pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // UUID variant bits
            if str_idx == 19 {
                dat = (dat & 0b0011) | 0b1000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Source of idempotency tokens for operations whose inputs carry one
///
/// The default provider draws from a random number generator. Tests can use a static token to
/// make request bodies predictable:
/// ```rust
/// use smithy_http::idempotency_token::IdempotencyTokenProvider;
/// let provider = IdempotencyTokenProvider::from("00000000-0000-4000-8000-000000000000");
/// assert_eq!(provider.make_idempotency_token(), "00000000-0000-4000-8000-000000000000");
/// ```
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

enum Inner {
    Static(&'static str),
    Random(Mutex<fastrand::Rng>),
}

pub fn default_provider() -> IdempotencyTokenProvider {
    IdempotencyTokenProvider::random()
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self::fixed(token)
    }
}

impl IdempotencyTokenProvider {
    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Static(token) => token.to_string(),
            Inner::Random(rng) => {
                let input: u128 = rng
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .u128(..);
                uuid_v4(input)
            }
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Inner::Random(Mutex::new(fastrand::Rng::with_seed(seed))),
        }
    }

    pub fn random() -> Self {
        Self {
            inner: Inner::Random(Mutex::new(fastrand::Rng::new())),
        }
    }

    pub fn fixed(token: &'static str) -> Self {
        Self {
            inner: Inner::Static(token),
        }
    }
}

impl std::fmt::Debug for IdempotencyTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Static(token) => f.debug_tuple("Static").field(token).finish(),
            Inner::Random(_) => f.write_str("Random"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{uuid_v4, IdempotencyTokenProvider};
    use proptest::prelude::*;

    #[test]
    fn uuid_has_version_and_variant() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(u128::MAX), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn random_tokens_differ() {
        let provider = IdempotencyTokenProvider::with_seed(42);
        let first = provider.make_idempotency_token();
        let second = provider.make_idempotency_token();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
    }

    proptest! {
        #[test]
        fn uuid_shape(input in any::<u128>()) {
            let uuid = uuid_v4(input);
            prop_assert_eq!(uuid.len(), 36);
            prop_assert_eq!(&uuid[14..15], "4");
            prop_assert!("89ab".contains(&uuid[19..20]));
            prop_assert_eq!(uuid.matches('-').count(), 4);
        }
    }
}
