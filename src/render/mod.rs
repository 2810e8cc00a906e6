/// CPU replay of vector recordings via `vello_cpu`.
pub(crate) mod cpu;
