pub mod orrery_vis3d;
