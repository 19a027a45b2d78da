use proptest::prelude::*;

use wallet_core::api;
use wallet_core::chains::hycon::{Address, HyconSigner};
use wallet_core::crypto::{KeyDeriver, Language, WalletMnemonic};
use wallet_core::error::AddressError;

fn entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mnemonic_word_count_and_entropy_roundtrip(entropy in entropy()) {
        let bits = entropy.len() * 8;
        let mnemonic = WalletMnemonic::from_entropy(&entropy, Language::English).unwrap();
        prop_assert_eq!(mnemonic.words().len(), (bits + bits / 32) / 11);

        let restored = WalletMnemonic::from_phrase(mnemonic.phrase(), Language::English).unwrap();
        prop_assert_eq!(&restored.to_entropy().unwrap()[..], &entropy[..]);
    }

    #[test]
    fn address_string_roundtrip(bytes in prop::array::uniform20(any::<u8>())) {
        let address = Address::from_bytes(bytes);
        let parsed: Address = address.to_string().parse().unwrap();
        prop_assert_eq!(parsed, address);
    }

    #[test]
    fn address_from_public_key_roundtrip(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(address) = Address::from_private_key(&seed) {
            let s = address.to_string();
            prop_assert_eq!(api::string_to_address(&s).unwrap(), address.to_bytes());
        }
    }

    #[test]
    fn address_single_char_mutation_fails(
        bytes in prop::array::uniform20(any::<u8>()),
        position in any::<prop::sample::Index>(),
        replacement in 0x20u8..0x7f,
    ) {
        let original = Address::from_bytes(bytes).to_string();
        let mut chars = original.clone().into_bytes();
        let i = position.index(chars.len());
        prop_assume!(chars[i] != replacement);
        chars[i] = replacement;
        let mutated = String::from_utf8(chars).unwrap();

        match mutated.parse::<Address>() {
            Err(AddressError::InvalidAddressPrefix(_)) => prop_assert_eq!(i, 0),
            Err(AddressError::ChecksumMismatch { .. }) | Err(AddressError::InvalidAddressLength(_)) => {
                prop_assert!(i > 0)
            }
            other => prop_assert!(false, "unexpected {:?} for {}", other, mutated),
        }
    }

    #[test]
    fn amount_string_roundtrip(value in any::<u64>()) {
        let s = api::amount_to_string(value);
        prop_assert_eq!(api::amount_from_string(&s).unwrap(), value);
        prop_assert!(!s.ends_with('0') || !s.contains('.'));
    }

    #[test]
    fn sign_then_recover(
        seed in prop::array::uniform32(any::<u8>()),
        hash in prop::array::uniform32(any::<u8>()),
    ) {
        if let Ok(signer) = HyconSigner::new(&seed) {
            let signature = signer.sign_hash(&hash).unwrap();
            prop_assert!(signature.recovery_id <= 1);
            prop_assert!(signer.verify(&hash, &signature));
            prop_assert_eq!(signature.recover_address(&hash).unwrap(), signer.address());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn batch_matches_single_derivation(
        seed in prop::collection::vec(any::<u8>(), 64),
        start in 0u32..1000,
    ) {
        let batch = KeyDeriver::derive_batch(&seed, start..start + 3).unwrap();
        for (offset, key) in batch.iter().enumerate() {
            let single = KeyDeriver::derive(&seed, start + offset as u32).unwrap();
            prop_assert_eq!(key.private_key_bytes(), single.private_key_bytes());
        }
    }
}
