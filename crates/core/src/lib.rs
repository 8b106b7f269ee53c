pub mod shared {
    pub mod constants;
    pub mod entity_id;
    pub mod rounding;
}

pub mod recognition {
    pub mod domain {
        pub mod check_response;
        pub mod face_recognizer;
        pub mod recognition_state;
    }
    pub mod infrastructure;
}

pub mod entity {
    pub mod domain {
        pub mod entity_attributes;
        pub mod image_processing_entity;
    }
    pub mod facebox_entity;
}

pub mod setup {
    pub mod entity_registry;
    pub mod platform_config;
    pub mod platform_setup;
}
