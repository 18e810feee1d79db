//! Ruby host support: install type detection, gem/bundler commands, rbenv.

pub mod gems;
pub mod install_type;
pub mod rbenv;

pub use gems::{
    bundle_exec, bundle_install, find_gem_in_list, gem_install, install_bundler,
    is_gem_installed,
};
pub use install_type::{RubyEnv, RubyInstallType};
pub use rbenv::{install_ruby, parse_rbenv_version, selected_ruby, RbenvRuby};
