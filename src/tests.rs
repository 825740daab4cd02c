use crate::{Algorithm, CipherError, decrypt, encrypt};

const MONO_KEY: &str = "qwertyuiopasdfghjklzxcvbnm";

fn roundtrip(algorithm: &str, key: &str, text: &str) -> String {
    let encrypted = encrypt(algorithm, key, text).unwrap();
    decrypt(algorithm, key, &encrypted).unwrap()
}

#[test]
fn test_every_algorithm_name_is_routed() {
    for algorithm in Algorithm::all() {
        assert_eq!(Algorithm::from_name(algorithm.as_str()).unwrap(), *algorithm);
    }
}

#[test]
fn test_algorithm_from_str() {
    let algorithm: Algorithm = "Hill Cipher".parse().unwrap();
    assert_eq!(algorithm, Algorithm::Hill);
    assert_eq!(algorithm.to_string(), "Hill Cipher");
}

#[test]
fn test_unsupported_algorithm() {
    let err = encrypt("Vigenere Cipher", "key", "text").unwrap_err();
    assert!(matches!(err, CipherError::UnsupportedAlgorithm { .. }));

    let err = decrypt("caesar cipher", "3", "text").unwrap_err();
    match err {
        CipherError::UnsupportedAlgorithm { name, suggestion } => {
            assert_eq!(name, "caesar cipher");
            assert_eq!(suggestion.as_deref(), Some("Caesar Cipher"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_caesar_dispatch() {
    assert_eq!(
        encrypt("Caesar Cipher", "3", "Attack at Dawn!").unwrap(),
        "Dwwdfn dw Gdzq!"
    );
    assert_eq!(
        decrypt("Caesar Cipher", "3", "Dwwdfn dw Gdzq!").unwrap(),
        "Attack at Dawn!"
    );
    assert_eq!(encrypt("Caesar Cipher", " -1 ", "abc").unwrap(), "zab");
}

#[test]
fn test_caesar_shift_beyond_i64() {
    // 10^30 = 14 (mod 26), and -(10^30 + 1) = 11 (mod 26)
    let huge = format!("1{}", "0".repeat(30));
    assert_eq!(encrypt("Caesar Cipher", &huge, "abc").unwrap(), "opq");
    assert_eq!(decrypt("Caesar Cipher", &huge, "opq").unwrap(), "abc");
    let negative = format!("-1{}1", "0".repeat(29));
    assert_eq!(encrypt("Caesar Cipher", &negative, "abc").unwrap(), "lmn");
    assert_eq!(encrypt("Caesar Cipher", "+3", "abc").unwrap(), "def");
}

#[test]
fn test_caesar_rejects_malformed_shifts() {
    for key in ["-", "+", "3.5", "1e3", "--3", "12a"] {
        assert!(
            matches!(
                encrypt("Caesar Cipher", key, "abc"),
                Err(CipherError::InvalidKey { .. })
            ),
            "accepted {:?}",
            key
        );
    }
}

#[test]
fn test_rail_fence_huge_count() {
    assert_eq!(
        encrypt("Rail Fence Cipher", "100000000000000", "hello").unwrap(),
        "hello"
    );
    assert_eq!(
        decrypt("Rail Fence Cipher", "100000000000000", "hello").unwrap(),
        "hello"
    );
    let beyond_usize = format!("9{}", "0".repeat(40));
    assert_eq!(
        encrypt("Rail Fence Cipher", &beyond_usize, "hello").unwrap(),
        "hello"
    );
}

#[test]
fn test_numeric_keys_must_parse() {
    for algorithm in ["Caesar Cipher", "Rail Fence Cipher"] {
        let err = encrypt(algorithm, "three", "text").unwrap_err();
        assert!(
            matches!(err, CipherError::InvalidKey { .. }),
            "{} accepted a non-numeric key",
            algorithm
        );
    }
}

#[test]
fn test_rail_fence_rejects_small_counts() {
    for key in ["1", "0", "-4"] {
        assert!(matches!(
            encrypt("Rail Fence Cipher", key, "hello"),
            Err(CipherError::InvalidKey { .. })
        ));
    }
}

#[test]
fn test_empty_key_is_invalid() {
    for algorithm in Algorithm::all() {
        assert!(matches!(
            encrypt(algorithm.as_str(), "", "abcd"),
            Err(CipherError::InvalidKey { .. })
        ));
    }
}

#[test]
fn test_mono_alphabetic_dispatch() {
    assert_eq!(
        encrypt("Mono Alphabetic Cipher", MONO_KEY, "Hello, World").unwrap(),
        "Itssg, Vgksr"
    );
    assert_eq!(
        roundtrip("Mono Alphabetic Cipher", MONO_KEY, "Hello, World"),
        "Hello, World"
    );
    assert!(matches!(
        encrypt("Mono Alphabetic Cipher", "abc", "hello"),
        Err(CipherError::InvalidKey { .. })
    ));
}

#[test]
fn test_rail_fence_dispatch() {
    assert_eq!(
        encrypt("Rail Fence Cipher", "3", "WEAREDISCOVEREDFLEEATONCE").unwrap(),
        "WECRLTEERDSOEEFEAOCAIVDEN"
    );
    assert_eq!(
        roundtrip("Rail Fence Cipher", "4", "Line one\nLine two\n"),
        "Line one\nLine two\n"
    );
}

#[test]
fn test_hill_dispatch() {
    assert_eq!(encrypt("Hill Cipher", "gybnqkurp", "act").unwrap(), "poh");
    assert_eq!(decrypt("Hill Cipher", "gybnqkurp", "poh").unwrap(), "act");
    assert_eq!(roundtrip("Hill Cipher", "ddcf", "shortexample"), "shortexample");
}

#[test]
fn test_hill_errors() {
    assert!(matches!(
        encrypt("Hill Cipher", "gybnqkur", "act"),
        Err(CipherError::InvalidKey { .. })
    ));
    assert!(matches!(
        encrypt("Hill Cipher", "gybnqkurp", "acts"),
        Err(CipherError::InvalidLength { .. })
    ));
    assert!(matches!(
        decrypt("Hill Cipher", "abcd", "hi"),
        Err(CipherError::NonInvertibleKey { .. })
    ));
}

#[test]
fn test_playfair_dispatch() {
    assert_eq!(
        encrypt("Playfair Cipher", "monarchy", "instrumentsx").unwrap(),
        "gatlmzclrqxa"
    );
    assert_eq!(
        roundtrip("Playfair Cipher", "monarchy", "instrumentsx"),
        "instrumentsx"
    );
    assert_eq!(roundtrip("Playfair Cipher", "monarchy", "hello"), "hellox");
    assert!(matches!(
        decrypt("Playfair Cipher", "monarchy", "abc"),
        Err(CipherError::InvalidLength { .. })
    ));
}

#[test]
fn test_cipher_reports_its_algorithm() {
    let keys = [
        (Algorithm::Caesar, "3"),
        (Algorithm::MonoAlphabetic, MONO_KEY),
        (Algorithm::RailFence, "2"),
        (Algorithm::Hill, "ddcf"),
        (Algorithm::Playfair, "monarchy"),
    ];
    for (algorithm, key) in keys {
        assert_eq!(algorithm.cipher(key).unwrap().algorithm(), algorithm);
    }
}

#[test]
fn test_ciphers_are_shareable_across_threads() {
    let cipher = std::sync::Arc::new(Algorithm::Hill.cipher("gybnqkurp").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cipher = std::sync::Arc::clone(&cipher);
            std::thread::spawn(move || cipher.encrypt("actcat").unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "pohfin");
    }
}
