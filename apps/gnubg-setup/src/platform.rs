//! Per-platform hints for installing the engine's build dependencies.

use std::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyHint {
    pub platform: &'static str,
    pub install_command: &'static str,
}

const MACOS: DependencyHint = DependencyHint {
    platform: "macOS",
    install_command: "brew install autoconf automake libtool pkg-config glib readline sqlite",
};

const DEBIAN: DependencyHint = DependencyHint {
    platform: "Ubuntu/Debian",
    install_command: "sudo apt-get update && sudo apt-get install build-essential autoconf \
                      automake libtool pkg-config libglib2.0-dev libreadline-dev libsqlite3-dev",
};

const REDHAT: DependencyHint = DependencyHint {
    platform: "Red Hat/CentOS/Fedora",
    install_command: "sudo dnf install -y autoconf automake libtool pkgconfig glib2-devel \
                      readline-devel sqlite-devel gcc make",
};

const GENERIC_LINUX: DependencyHint = DependencyHint {
    platform: "Linux",
    install_command: "install build-essential autoconf automake libtool pkg-config \
                      libglib2.0-dev with your distribution's package manager",
};

const OTHER: DependencyHint = DependencyHint {
    platform: "other",
    install_command: "install a C toolchain plus autoconf, automake, libtool, pkg-config and glib",
};

/// Hint for the platform this binary runs on.
pub fn current() -> DependencyHint {
    match std::env::consts::OS {
        "macos" => MACOS,
        "linux" => fs::read_to_string("/etc/os-release")
            .map(|release| for_linux_release(&release))
            .unwrap_or(GENERIC_LINUX),
        _ => OTHER,
    }
}

/// Pick a hint from `/etc/os-release` contents.
pub fn for_linux_release(os_release: &str) -> DependencyHint {
    if ["Ubuntu", "Debian"].iter().any(|d| os_release.contains(d)) {
        DEBIAN
    } else if ["CentOS", "Red Hat", "Fedora"]
        .iter()
        .any(|d| os_release.contains(d))
    {
        REDHAT
    } else {
        GENERIC_LINUX
    }
}
