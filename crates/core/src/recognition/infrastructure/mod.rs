pub mod http_facebox_client;
