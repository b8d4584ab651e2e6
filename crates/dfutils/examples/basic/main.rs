//! Print one of each fragment.
//!
//! Run with: `cargo run -p dfutils --example basic`

use dfutils::prelude::*;

fn main() -> Result<(), DfError> {
    println!("-- deduplicate");
    println!(
        "{}\n",
        deduplicate("raw.customers", "customer_id", "updated_at DESC")
    );

    println!("-- surrogate key");
    println!("{}\n", generate_surrogate_key(["order_id", "line_no"]));

    println!("-- union relations");
    let sql = UnionRelations::new([("eu", "raw.orders_eu"), ("us", "raw.orders_us")])
        .fields(["order_id", "amount"])
        .try_to_sql()?;
    println!("{sql}");

    Ok(())
}
