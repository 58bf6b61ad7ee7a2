//! Integration tests for report and bill export against a real SQLite
//! database.

use restaurant_export::{Error, generate_bill, write_report};
use restaurant_records::{RecordStore, schema};
use restaurant_store::Store;
use tempfile::TempDir;

struct TestDb {
   records: RecordStore,
   _temp_file: tempfile::NamedTempFile,
}

async fn setup_test_db() -> TestDb {
   let temp_file = tempfile::NamedTempFile::new().unwrap();
   let store = Store::connect(temp_file.path(), None).await.unwrap();

   let pool = store.pool().unwrap();
   sqlx::query(
      r#"
      CREATE TABLE menu (
         menu_item_id TEXT PRIMARY KEY,
         item_name TEXT,
         price TEXT
      )
      "#,
   )
   .execute(pool)
   .await
   .unwrap();

   TestDb {
      records: RecordStore::new(store),
      _temp_file: temp_file,
   }
}

async fn seed_menu(records: &RecordStore, rows: &[[&str; 3]]) {
   let columns = schema::MENU.column_names();
   for row in rows {
      let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
      records.insert("menu", &columns, &values).await.unwrap();
   }
}

// ============================================================================
// Report
// ============================================================================

#[tokio::test]
async fn test_report_dumps_header_and_rows() {
   let db = setup_test_db().await;
   let out = TempDir::new().unwrap();

   seed_menu(
      &db.records,
      &[
         ["M1", "Fried Rice", "15000"],
         ["M2", "Satay", "20000"],
      ],
   )
   .await;

   let path = write_report(&db.records, &schema::MENU, out.path())
      .await
      .unwrap();

   assert_eq!(path, out.path().join("menu_report.csv"));
   assert_eq!(
      std::fs::read_to_string(&path).unwrap(),
      "menu_item_id,item_name,price\nM1,Fried Rice,15000\nM2,Satay,20000\n"
   );
}

#[tokio::test]
async fn test_report_of_empty_table_is_just_the_header() {
   let db = setup_test_db().await;
   let out = TempDir::new().unwrap();

   let path = write_report(&db.records, &schema::MENU, out.path())
      .await
      .unwrap();

   assert_eq!(
      std::fs::read_to_string(&path).unwrap(),
      "menu_item_id,item_name,price\n"
   );
}

#[tokio::test]
async fn test_report_writes_values_unescaped() {
   let db = setup_test_db().await;
   let out = TempDir::new().unwrap();

   seed_menu(&db.records, &[["M1", "Rice, fried", "15000"]]).await;

   let path = write_report(&db.records, &schema::MENU, out.path())
      .await
      .unwrap();

   // The embedded comma goes through verbatim and widens the line
   assert_eq!(
      std::fs::read_to_string(&path).unwrap(),
      "menu_item_id,item_name,price\nM1,Rice, fried,15000\n"
   );
}

// ============================================================================
// Bill
// ============================================================================

#[tokio::test]
async fn test_bill_embeds_item_and_two_decimal_price() {
   let db = setup_test_db().await;
   let out = TempDir::new().unwrap();

   seed_menu(&db.records, &[["M1", "Fried Rice", "15000"]]).await;

   let receipt = generate_bill(&db.records, "Budi Santoso", "M1", out.path())
      .await
      .unwrap();

   assert!(receipt.text.contains("Customer: Budi Santoso"));
   assert!(receipt.text.contains("Order: Fried Rice"));
   assert!(receipt.text.contains("Total: Rp 15000.00"));

   // The file holds exactly the rendered text
   assert_eq!(std::fs::read_to_string(&receipt.path).unwrap(), receipt.text);
}

#[tokio::test]
async fn test_bill_file_name_is_sanitized() {
   let db = setup_test_db().await;
   let out = TempDir::new().unwrap();

   seed_menu(&db.records, &[["M1", "Fried Rice", "15000"]]).await;

   let receipt = generate_bill(&db.records, "Budi Santoso", "M1", out.path())
      .await
      .unwrap();

   assert_eq!(receipt.path, out.path().join("Budi_Santoso_bill.txt"));
}

#[tokio::test]
async fn test_bill_unknown_order_code_writes_no_file() {
   let db = setup_test_db().await;
   let out = TempDir::new().unwrap();

   seed_menu(&db.records, &[["M1", "Fried Rice", "15000"]]).await;

   let err = generate_bill(&db.records, "Budi Santoso", "M9", out.path())
      .await
      .unwrap_err();

   assert!(matches!(err, Error::UnknownOrderCode(code) if code == "M9"));
   assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_bill_unparsable_price_writes_no_file() {
   let db = setup_test_db().await;
   let out = TempDir::new().unwrap();

   seed_menu(&db.records, &[["M1", "Fried Rice", "gratis"]]).await;

   let err = generate_bill(&db.records, "Budi Santoso", "M1", out.path())
      .await
      .unwrap_err();

   assert!(matches!(err, Error::InvalidPrice { value } if value == "gratis"));
   assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}
