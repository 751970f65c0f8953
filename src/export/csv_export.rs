use std::io::Write;

use crate::error::Result;
use crate::planner::{ShoppingList, format_quantity};

/// Write the list as `ingredient,quantity,unit` rows.
pub fn write_shopping_csv<W: Write>(list: &ShoppingList, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ingredient", "quantity", "unit"])?;
    for item in list.items() {
        let quantity = format_quantity(item.quantity);
        wtr.write_record([item.name, quantity.as_str(), item.unit])?;
    }

    wtr.flush()?;
    Ok(())
}
