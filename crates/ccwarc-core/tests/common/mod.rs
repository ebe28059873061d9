pub mod paths_server;
