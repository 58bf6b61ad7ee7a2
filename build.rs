fn main() {
   tauri_plugin::Builder::new(&[
      "load",
      "tables",
      "fetch_table",
      "add_record",
      "update_record",
      "delete_record",
      "generate_report",
      "generate_bill",
      "close",
   ])
   .build();
}
