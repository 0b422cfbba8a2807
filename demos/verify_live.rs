//! Live verification against the production services.
//!
//! Requires network access. Pass the VAT ID to check as the first argument;
//! for an additional eVatR confirmation also pass your own German VAT ID and
//! the partner's company name:
//!
//! ```text
//! cargo run --example verify_live --features all -- ATU12345678 DE129273398 "ACME GmbH"
//! ```

use ustid::VerificationRequest;
use ustid::verify::Verifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let tax_id = args.next().unwrap_or_else(|| "DE129273398".into());
    let own_vat_id = args.next();
    let company_name = args.next();

    let verifier = Verifier::new()?;

    println!("=== VIES ===\n");
    let request = VerificationRequest::vies(&tax_id).adopt_address(true);
    match verifier.verify(&request).await {
        Ok(result) => {
            println!("  valid: {}", result.valid);
            if let Some(name) = &result.matched_name {
                println!("  name:  {name}");
            }
            if let Some(addr) = &result.matched_address {
                println!("  addr:  {}", addr.replace('\n', " / "));
            }
            if let Some(addr) = &result.structured_address {
                println!(
                    "  decomposed: {}, {} {} ({})",
                    addr.street, addr.postal_code, addr.locality, addr.country_locode
                );
            }
        }
        Err(e) => println!("  failed: {e}"),
    }

    if let (Some(own_vat_id), Some(company_name)) = (own_vat_id, company_name) {
        println!("\n=== eVatR ===\n");
        let request = VerificationRequest::evatr(&tax_id, own_vat_id, company_name);
        match verifier.verify(&request).await {
            Ok(result) => {
                println!(
                    "  valid: {} (code {})",
                    result.valid,
                    result.error_code.as_deref().unwrap_or("-")
                );
                for line in &result.diagnostics {
                    println!("  {line}");
                }
            }
            Err(e) => println!("  failed: {e}"),
        }
    }

    Ok(())
}
