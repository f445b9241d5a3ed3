pub mod vp;
