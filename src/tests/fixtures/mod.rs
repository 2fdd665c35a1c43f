pub mod time_entries;
