// Crate entry point. Declares the bootstrap modules so the wasm start hook, the
// flags tool and the tests can reach them.
//
// Layout
// - shared/infrastructure: ports onto the host environment (clock, config, DOM,
//   location, offline cache) with in-memory and browser adapters.
// - modules/bootstrap: endpoint resolution, flags, favicon presentation and the
//   application mount.
// - shell: composition root.

pub mod shared {
    pub mod infrastructure {
        pub mod clock;
        pub mod config;
        pub mod dom;
        pub mod location;
        pub mod offline_cache;
    }
}

pub mod modules {
    pub mod bootstrap {
        pub mod core {
            pub mod endpoint;
            pub mod favicon;
            pub mod flags;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod build_flags {
                pub mod handler;
            }
            pub mod mount_application {
                pub mod handler;
            }
            pub mod present_favicon {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod application_in_memory;
                #[cfg(target_arch = "wasm32")]
                pub mod application_elm;
            }
        }
    }
}

pub mod shell;
