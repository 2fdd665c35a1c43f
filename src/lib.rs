pub mod shared {
    pub mod core {
        pub mod html;
    }
    pub mod infrastructure {
        pub mod artifact_store;
        pub mod process_launcher;
    }
}

pub mod modules {
    pub mod hours_report {
        pub mod core {
            pub mod aggregate;
            pub mod palette;
            pub mod ranking;
            pub mod time_entry;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod render_table {
                pub mod table;
            }
            pub mod render_chart {
                pub mod chart;
            }
            pub mod export_image {
                pub mod exporter;
                pub mod outcome;
                pub mod strategy;
            }
            pub mod generate_report {
                pub mod handler;
                pub mod source_port;
                pub mod summary;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod file_time_entry_source;
                pub mod http_time_entry_source;
                pub mod in_memory_time_entry_source;
            }
        }
    }
}

pub mod shell;
