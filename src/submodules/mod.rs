pub mod batch_submitter;
pub mod cloud_plotter;
pub mod func_lib;
pub mod ice_plotter;
pub mod table;
pub mod type_lib;
