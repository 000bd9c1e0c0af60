pub mod records_server;
