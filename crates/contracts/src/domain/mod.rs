pub mod a001_order_record;
