use ustid::core::*;

fn main() {
    // Offline building blocks (no network required)
    println!("=== Plausibility Gate ===\n");

    let test_ids = [
        "DE129273398",
        "ATU12345678",
        "129273398",
        "DE12", // too short
        "",     // empty
    ];

    for id in &test_ids {
        match require_plausible(id) {
            Ok(()) => println!("  {id:?} => plausible"),
            Err(e) => println!("  {id:?} => REJECTED: {e}"),
        }
    }

    println!("\n=== Split Policies ===\n");

    for id in ["DE129273398", "ATU12345678", "129273398", "1293X"] {
        let strict = VatId::split_strict(id);
        let lenient = VatId::split_lenient(id, "DE");
        println!("  {id}:");
        println!(
            "    strict  => country={:?}, number={}",
            strict.country_code, strict.number
        );
        println!(
            "    lenient => country={:?}, number={}",
            lenient.country_code, lenient.number
        );
    }

    println!("\n=== Address Decomposition ===\n");

    let addresses = [
        "Friedrichstraße 123\n10115 Berlin DE",
        "Marienplatz 1\n80331 München DE",
        "Rathausplatz 2\n60311 Frankfurt am Main DE",
        "Hauptstraße 5", // one line, not decomposable
        "X\n1 X DE",     // second line too short
    ];

    for raw in &addresses {
        println!("  {raw:?}:");
        match decompose_address(raw) {
            Ok(Some(addr)) => {
                println!("    street  = {}", addr.street);
                println!("    postal  = {}", addr.postal_code);
                println!("    city    = {}", addr.locality);
                println!("    country = {}", addr.country_locode);
            }
            Ok(None) => println!("    not decomposable (needs two lines)"),
            Err(e) => println!("    ERROR: {e}"),
        }
    }
}
