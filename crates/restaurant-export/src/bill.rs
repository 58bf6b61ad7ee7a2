//! Bill generation: a human-readable receipt joining a customer's order
//! code to a menu row.

use std::fs;
use std::path::{Path, PathBuf};

use restaurant_records::RecordStore;
use restaurant_records::schema::MENU;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A rendered bill and where it was written.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
   /// The receipt text, exactly as written to the file.
   pub text: String,
   /// Path of the written `<customer>_bill.txt` file.
   pub path: PathBuf,
}

/// Look up `order_code` in the menu table and write a receipt for
/// `customer_name` under `dir`.
///
/// The menu is re-queried in full and scanned linearly; `order_menu` on the
/// customers table references `menu.menu_item_id` by convention only, so an
/// absent code is a lookup failure here. No file is written on any failure.
pub async fn generate_bill(
   records: &RecordStore,
   customer_name: &str,
   order_code: &str,
   dir: &Path,
) -> Result<Receipt> {
   let columns = MENU.column_names();
   let rows = records.fetch_all(MENU.name, &columns).await?;

   let row = rows
      .iter()
      .find(|row| row[0] == order_code)
      .ok_or_else(|| Error::UnknownOrderCode(order_code.to_string()))?;

   let item_name = &row[1];
   let price: f64 = row[2].parse().map_err(|_| Error::InvalidPrice {
      value: row[2].clone(),
   })?;

   let text = render_receipt(customer_name, item_name, price);
   let path = dir.join(format!("{}_bill.txt", sanitize_file_name(customer_name)));
   fs::write(&path, &text)?;

   debug!("Wrote bill for '{}' to {}", customer_name, path.display());
   Ok(Receipt { text, path })
}

/// Render the fixed-format receipt. The price always carries exactly two
/// decimal places.
pub fn render_receipt(customer_name: &str, item_name: &str, price: f64) -> String {
   format!(
      "=== PAYMENT RECEIPT ===\n\
       Customer: {customer_name}\n\
       Order: {item_name}\n\
       Total: Rp {price:.2}\n\
       ======================="
   )
}

/// Replace characters that would break a file name (whitespace and path
/// separators) with underscores.
fn sanitize_file_name(name: &str) -> String {
   name
      .chars()
      .map(|c| {
         if c.is_whitespace() || c == '/' || c == '\\' {
            '_'
         } else {
            c
         }
      })
      .collect()
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_render_receipt_formats_price_to_two_decimals() {
      let text = render_receipt("Budi Santoso", "Fried Rice", 15000.0);

      assert_eq!(
         text,
         "=== PAYMENT RECEIPT ===\n\
          Customer: Budi Santoso\n\
          Order: Fried Rice\n\
          Total: Rp 15000.00\n\
          ======================="
      );
   }

   #[test]
   fn test_render_receipt_keeps_fractional_prices() {
      let text = render_receipt("Ana", "Tea", 2500.5);
      assert!(text.contains("Total: Rp 2500.50"));
   }

   #[test]
   fn test_sanitize_file_name() {
      assert_eq!(sanitize_file_name("Budi Santoso"), "Budi_Santoso");
      assert_eq!(sanitize_file_name("a/b\\c"), "a_b_c");
      assert_eq!(sanitize_file_name("plain"), "plain");
   }
}
