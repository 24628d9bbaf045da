mod command_sample_source;
mod route_sampler;
mod sample_source;

pub use command_sample_source::CommandSampleSource;
pub use route_sampler::RouteSampler;
pub use sample_source::SampleSource;
