pub mod airport;
pub mod plane;
pub mod queues;
