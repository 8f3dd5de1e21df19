pub mod barangs;
