pub mod rpc_client;
