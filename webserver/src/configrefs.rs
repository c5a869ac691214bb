use std::path::PathBuf;
use citylook::config::{ValueRef, parse, validate};

pub const UI_PATH: ValueRef<'static, PathBuf> = ValueRef {
    names: &["webserver", "paths", "ui"],
    def: "/usr/share/citylook/webserver/resources/ui",
    type_: &parse::FILE_PATH,
    validators: &[],
};

pub const SERVER_ALL_INTERFACES: ValueRef<'static, bool> = ValueRef {
    names: &["webserver", "server", "all-interfaces"],
    def: "true",
    type_: &parse::BOOL,
    validators: &[],
};

pub const SERVER_PORT: ValueRef<'static, u16> = ValueRef {
    names: &["webserver", "server", "port"],
    def: "26800",
    type_: &parse::WEB_PORT,
    validators: &[],
};

pub const SERVER_ROOT_PATH: ValueRef<'static, String> = ValueRef {
    names: &["webserver", "server", "root-path"],
    def: "/",
    type_: &parse::STRING,
    validators: &[validate::WEB_PATH],
};

pub const SERVER_API_PATH: ValueRef<'static, String> = ValueRef {
    names: &["webserver", "server", "paths", "api"],
    def: "/api",
    type_: &parse::STRING,
    validators: &[validate::WEB_PATH],
};

pub const SERVER_UI_PATH: ValueRef<'static, String> = ValueRef {
    names: &["webserver", "server", "paths", "ui"],
    def: "/ui",
    type_: &parse::STRING,
    validators: &[validate::WEB_PATH],
};
