//! Static registry of the restaurant tables.
//!
//! The access layer itself is generic over table and column names; this
//! registry is what the presentation layer consults to know which tables
//! exist, which columns they have, and what kind of input each column
//! takes. Columns are an explicit ordered mapping from name to input
//! capability, so nothing downstream has to line up parallel arrays.

use serde::Serialize;

/// Allowed values for the employee attendance selector.
pub const ATTENDANCE_STATUSES: &[&str] = &["Present", "Late", "Absent"];

/// Input capability of a column, driving which widget the frontend renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Input {
   /// Assigned by the database; no input field is rendered and the column
   /// is excluded from inserts.
   Generated,
   /// Free-form text field.
   Text,
   /// Fixed set of allowed values rendered as a selector. Membership is a
   /// frontend concern; the access layer stores whatever it is given.
   Choice(&'static [&'static str]),
}

/// A column together with its input capability.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
   /// Column name as it appears in the database
   pub name: &'static str,
   /// How the frontend collects a value for this column
   pub input: Input,
}

/// The ordered column list for one table.
///
/// The first column is always the key used to address a single row.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec {
   /// Table name as it appears in the database
   pub name: &'static str,
   /// Columns in declaration order
   pub columns: &'static [ColumnSpec],
}

impl TableSpec {
   /// All column names, in declaration order.
   pub fn column_names(&self) -> Vec<&'static str> {
      self.columns.iter().map(|c| c.name).collect()
   }

   /// The key column used to address a single row (always the first).
   pub fn key_column(&self) -> &'static str {
      self.columns[0].name
   }

   /// Columns a new record takes input for; database-generated columns are
   /// excluded.
   pub fn insert_columns(&self) -> Vec<&'static str> {
      self
         .columns
         .iter()
         .filter(|c| c.input != Input::Generated)
         .map(|c| c.name)
         .collect()
   }

   /// Columns an update may change (everything but the key).
   pub fn update_columns(&self) -> Vec<&'static str> {
      self.columns[1..].iter().map(|c| c.name).collect()
   }
}

/// `customers(customer_id, customer_name, order_menu)`
///
/// `order_menu` references `menu.menu_item_id` by convention only; nothing
/// enforces it until bill generation looks the code up.
pub const CUSTOMERS: TableSpec = TableSpec {
   name: "customers",
   columns: &[
      ColumnSpec {
         name: "customer_id",
         input: Input::Generated,
      },
      ColumnSpec {
         name: "customer_name",
         input: Input::Text,
      },
      ColumnSpec {
         name: "order_menu",
         input: Input::Text,
      },
   ],
};

/// `employees(employee_id, date, status)`
pub const EMPLOYEES: TableSpec = TableSpec {
   name: "employees",
   columns: &[
      ColumnSpec {
         name: "employee_id",
         input: Input::Text,
      },
      ColumnSpec {
         name: "date",
         input: Input::Text,
      },
      ColumnSpec {
         name: "status",
         input: Input::Choice(ATTENDANCE_STATUSES),
      },
   ],
};

/// `menu(menu_item_id, item_name, price)`
///
/// `price` is stored as text and parsed as a number only at bill time.
pub const MENU: TableSpec = TableSpec {
   name: "menu",
   columns: &[
      ColumnSpec {
         name: "menu_item_id",
         input: Input::Text,
      },
      ColumnSpec {
         name: "item_name",
         input: Input::Text,
      },
      ColumnSpec {
         name: "price",
         input: Input::Text,
      },
   ],
};

/// Every table the application manages, in selector order.
pub const TABLES: &[TableSpec] = &[CUSTOMERS, EMPLOYEES, MENU];

/// Look up a table descriptor by name.
pub fn table_spec(name: &str) -> Option<&'static TableSpec> {
   TABLES.iter().find(|t| t.name == name)
}
