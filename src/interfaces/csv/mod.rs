pub mod points_writer;
