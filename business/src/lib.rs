pub mod application {
    pub mod app {
        pub mod initialize;
    }
}

pub mod domain {
    pub mod logger;
    pub mod app {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod initialize;
        }
    }
}
