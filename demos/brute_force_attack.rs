//! Sign a transaction on the toy curve, then recover the private key by
//! brute force and forge a new signature with it

use std::error::Error;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use toyecc::params::traditional::ecdsa::TOY_DEMO_MESSAGE;
use toyecc::sign::{brute_force_with_stats, ToyEcdsa};

/// What the walkthrough observed, for checking without reading stdout
#[derive(Debug)]
struct Outcome {
    signature_valid: bool,
    recovered_key: Option<u64>,
    forged_signature_valid: Option<bool>,
}

fn walkthrough<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Outcome, Box<dyn Error>> {
    println!("=== Toy Elliptic Curve Signature Demo ===");

    let scheme = ToyEcdsa::toy();

    // Generate keys
    let keypair = scheme.generate_keys(rng)?;
    println!("Private key: {}", keypair.secret_key().value());
    println!("Public key: {}", keypair.public_key());

    // Sign a transaction
    let message = TOY_DEMO_MESSAGE.as_bytes();
    let signature = scheme.sign(message, keypair.secret_key(), rng)?;
    println!("Message: {}", TOY_DEMO_MESSAGE);
    println!("Signature: {}", signature);

    let signature_valid = scheme.verify(message, &signature, keypair.public_key());
    println!("Signature valid: {}", signature_valid);

    println!("\n=== Simulating Brute-Force Attack ===");
    println!("Attempting brute-force attack...");
    let report = brute_force_with_stats(scheme.params(), keypair.public_key());

    let mut outcome = Outcome {
        signature_valid,
        recovered_key: None,
        forged_signature_valid: None,
    };

    match report.recovered {
        Some(recovered) => {
            println!(
                "Private key found: {} (after {} candidates)",
                recovered.value(),
                report.candidates_tried
            );

            // The forged signature is checked against the victim's public key
            let forged = scheme.sign(message, &recovered, rng)?;
            let forged_valid = scheme.verify(message, &forged, keypair.public_key());
            println!("Signature with recovered key valid: {}", forged_valid);

            outcome.recovered_key = Some(recovered.value());
            outcome.forged_signature_valid = Some(forged_valid);
        }
        None => println!("Private key not found (should not happen on this curve)."),
    }

    println!(
        "\nNote: this demo uses a tiny curve (p={}, n={}). Real deployments such as \
         Bitcoin use secp256k1 with 256-bit keys, making brute force infeasible.",
        scheme.params().p(),
        scheme.params().n()
    );

    Ok(outcome)
}

fn main() -> Result<(), Box<dyn Error>> {
    let outcome = walkthrough(&mut OsRng)?;
    if !outcome.signature_valid
        || outcome.recovered_key.is_none()
        || outcome.forged_signature_valid != Some(true)
    {
        return Err("demo walkthrough did not complete".into());
    }
    Ok(())
}
