pub mod fcfs_test;
pub mod sim_test;
