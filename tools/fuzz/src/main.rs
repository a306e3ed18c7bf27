use afl::fuzz;
use dd_bank_identifiers::{sanitize_iban, BicValidator, IbanCheck, IbanValidator, Validator};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (allowed_countries, bytes) = split_bytes_once(bytes)?;
    let (input, rand_seed) = split_bytes_once(bytes)?;

    let allowed_countries_str = std::str::from_utf8(allowed_countries).ok()?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(allowed_countries_str, input_str, rng);

    Some(())
}

fn run_fuzz(allowed_countries: &str, input: &str, mut rng: StdRng) {
    let allowed_countries: Vec<&str> = allowed_countries
        .split(';')
        .filter(|country| !country.is_empty())
        .collect();
    let allow_unrecognized_country = rng.gen_bool(0.5);

    #[cfg(feature = "manual_test")]
    {
        println!("Allowed countries: {:?}", allowed_countries);
        println!("Allow unrecognized country: {:?}", allow_unrecognized_country);
        println!("Input: {:?}", input);
    }

    // malformed allow-lists are rejected at build time, never during validation
    let Ok(validator) = IbanValidator::builder()
        .with_allow_unrecognized_country(allow_unrecognized_country)
        .with_allowed_countries(allowed_countries)
        .build()
    else {
        return;
    };

    let outcome = validator.check(input);
    assert_eq!(validator.validate(input), outcome == IbanCheck::Valid);

    let sanitized = validator.sanitize(input);
    assert_eq!(sanitize_iban(&sanitized), sanitized);
    assert_eq!(
        validator.invoke(input),
        validator.validate(&sanitized).then(|| sanitized.clone())
    );
    if outcome == IbanCheck::Valid {
        assert_eq!(validator.invoke(input), Some(input.to_ascii_uppercase()));
    }

    let bic_validator = BicValidator::new();
    let bic_sanitized = bic_validator.sanitize(input);
    assert_eq!(
        bic_validator.invoke(input),
        bic_validator
            .validate(&bic_sanitized)
            .then(|| bic_sanitized.clone())
    );

    #[cfg(feature = "manual_test")]
    {
        println!("Outcome: {:?}", outcome);
        println!("Sanitized: {:?}", sanitized);
    }
}
