pub mod events;

pub use events::ChannelShellEventPort;
