pub mod remote_procedure;
