pub mod column_value;
