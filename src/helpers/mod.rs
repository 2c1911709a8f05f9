pub mod scratch_dir;
