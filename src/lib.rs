pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod date;
        pub mod event_recorder;
        pub mod identifier;
    }
    pub mod infrastructure {
        pub mod domain_outbox;
    }
}

pub mod modules {
    pub mod work_entries {
        pub mod core {
            pub mod errors;
            pub mod events;
            pub mod snapshot;
            pub mod time_interval;
            pub mod work_entry;
        }
        pub mod application {
            pub mod context;
            pub mod errors;
            pub mod relay;
        }
        pub mod use_cases {
            pub mod start_work_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod create_work_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod finish_work_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod update_work_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod delete_work_entry {
                pub mod command;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_outbox;
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
}

pub mod shell;
