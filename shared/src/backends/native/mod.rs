pub mod system_clock;
