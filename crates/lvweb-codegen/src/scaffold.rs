//! Static LVGL project files.
//!
//! These files do not depend on the translated page: LVGL and driver
//! configuration, the SDL2 simulator entry point, the tick source, the
//! `ui_app.h` declaration, and the CMake project with its wrapper script.
//! Paths are relative to the LVGL project directory.

/// One file of the generated LVGL project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: &'static str,
    pub contents: &'static str,
    /// Mark the file executable (Unix only).
    pub executable: bool,
}

/// Path of the generated UI source, relative to the project directory.
pub const UI_SOURCE_PATH: &str = "generated/ui_app.c";

/// First line of the generated UI source.
pub const UI_SOURCE_PREAMBLE: &str = "#include \"ui_app.h\"\n";

const LV_CONF_H: &str = r#"#ifndef LV_CONF_H
#define LV_CONF_H
#define LV_USE_LOG 1
#define LV_COLOR_DEPTH 32
#define LV_USE_FONT_ROBOTO 0
#define LV_USE_FONT_MONTSERRAT 1
#define LV_FONT_MONTSERRAT_16 1
#define LV_FONT_MONTSERRAT_18 1
#define LV_FONT_MONTSERRAT_22 1
#define LV_FONT_MONTSERRAT_30 1
#define LV_FONT_MONTSERRAT_36 1
#define LV_FONT_DEFAULT &lv_font_montserrat_16
#define LV_TICK_CUSTOM 1
#define LV_TICK_CUSTOM_INCLUDE "tick.h"
#define LV_TICK_CUSTOM_SYS_TIME_EXPR (lv_tick_custom_handler())
#endif
"#;

const LV_DRV_CONF_H: &str = r#"#ifndef LV_DRV_CONF_H
#define LV_DRV_CONF_H
#define SDL_HOR_RES 720
#define SDL_VER_RES 1280
#define USE_SDL 1
#define SDL_INCLUDE_PATH <SDL2/SDL.h>
#define MONITOR_ZOOM 1
#endif
"#;

const MAIN_C: &str = r#"#include "lvgl.h"
#include "lv_conf.h"
#ifndef SDL_MAIN_HANDLED
#define SDL_MAIN_HANDLED
#endif
#include <SDL2/SDL.h>
#include "sdl/sdl.h"
#include "generated/ui_app.h"

#define SCREEN_W 720
#define SCREEN_H 1280

static void hal_init(void) {
  lv_init();
  sdl_init();

  static lv_color_t buf1[SCREEN_W * 80];
  static lv_color_t buf2[SCREEN_W * 80];
  static lv_disp_draw_buf_t draw_buf;
  lv_disp_draw_buf_init(&draw_buf, buf1, buf2, SCREEN_W * 80);

  static lv_disp_drv_t disp_drv;
  lv_disp_drv_init(&disp_drv);
  disp_drv.hor_res = SCREEN_W;
  disp_drv.ver_res = SCREEN_H;
  disp_drv.flush_cb = sdl_display_flush;
  disp_drv.draw_buf = &draw_buf;
  lv_disp_drv_register(&disp_drv);

  static lv_indev_drv_t indev_drv;
  lv_indev_drv_init(&indev_drv);
  indev_drv.type = LV_INDEV_TYPE_POINTER;
  indev_drv.read_cb = sdl_mouse_read;
  lv_indev_drv_register(&indev_drv);
}

int main(void) {
  hal_init();
  ui_build();
  while (1) {
    lv_timer_handler();
    SDL_Delay(5);
  }
  return 0;
}
"#;

const TICK_H: &str = r#"#pragma once
#include <stdint.h>
#include <SDL2/SDL.h>
static inline uint32_t lv_tick_custom_handler(void) {
  return SDL_GetTicks();
}
"#;

const UI_APP_H: &str = r#"#pragma once
void ui_build(void);
"#;

const CMAKE_LISTS: &str = r#"cmake_minimum_required(VERSION 3.16)
project(lvgl_web_ui C)
set(CMAKE_C_STANDARD 99)
set(CMAKE_POSITION_INDEPENDENT_CODE ON)

include(FetchContent)
# v8.3.11 matches lv_drivers master API
set(LVGL_TAG v8.3.11)
set(LV_DRIVERS_TAG master)

set(LVGL_GIT_URL_DEFAULT "https://github.com/lvgl/lvgl.git")
set(LVGL_GIT_URL "${LVGL_GIT_URL_DEFAULT}" CACHE STRING "LVGL git URL")
set(LVGL_SOURCE_DIR "${CMAKE_CURRENT_LIST_DIR}/.deps/lvgl" CACHE PATH "Local LVGL source path")

# lv_drivers is used as a source directory only (no CMake from that repo).
set(LV_DRIVERS_DIR "${CMAKE_CURRENT_LIST_DIR}/.deps/lv_drivers" CACHE PATH "Local LV drivers path")
if(NOT EXISTS "${LV_DRIVERS_DIR}/sdl/sdl.c")
  message(FATAL_ERROR "lv_drivers not found at ${LV_DRIVERS_DIR}; run `lvweb --build` to prefetch.")
endif()

FetchContent_Declare(
  lvgl
  GIT_REPOSITORY ${LVGL_GIT_URL}
  GIT_TAG ${LVGL_TAG}
  SOURCE_DIR ${LVGL_SOURCE_DIR}
)
FetchContent_MakeAvailable(lvgl)

target_compile_definitions(lvgl PUBLIC
  LV_CONF_INCLUDE_SIMPLE
  LV_LVGL_H_INCLUDE_SIMPLE
)
target_include_directories(lvgl PUBLIC ${CMAKE_CURRENT_SOURCE_DIR})

add_executable(lvgl_web
  main.c
  generated/ui_app.c
  ${LV_DRIVERS_DIR}/sdl/sdl.c
  ${LV_DRIVERS_DIR}/sdl/sdl_common.c
)

target_include_directories(lvgl_web PRIVATE
  ${lvgl_SOURCE_DIR}
  ${LV_DRIVERS_DIR}
  ${CMAKE_CURRENT_SOURCE_DIR}
  ${CMAKE_CURRENT_SOURCE_DIR}/generated
)

target_compile_definitions(lvgl_web PRIVATE
  LV_CONF_INCLUDE_SIMPLE
  LV_DRV_CONF_INCLUDE_SIMPLE
  LV_LVGL_H_INCLUDE_SIMPLE
  SDL_MAIN_HANDLED
  LV_TICK_CUSTOM_INCLUDE="tick.h"
)

find_package(PkgConfig REQUIRED)
pkg_check_modules(SDL2 REQUIRED sdl2)

target_link_libraries(lvgl_web PRIVATE
  lvgl
  ${SDL2_LIBRARIES}
)
target_include_directories(lvgl_web PRIVATE ${SDL2_INCLUDE_DIRS})
"#;

const BUILD_SH: &str = r#"#!/usr/bin/env bash
set -euo pipefail
SCRIPT_DIR=$(cd "$(dirname "$0")" && pwd)
BUILD_DIR="$SCRIPT_DIR/build"
mkdir -p "$BUILD_DIR"
cd "$BUILD_DIR"
cmake .. -DCMAKE_BUILD_TYPE=Release \
  -DFETCHCONTENT_FULLY_DISCONNECTED=ON \
  -DFETCHCONTENT_QUIET=OFF \
  -DLVGL_SOURCE_DIR="$SCRIPT_DIR/.deps/lvgl" \
  -DLV_DRIVERS_DIR="$SCRIPT_DIR/.deps/lv_drivers"
cmake --build . --config Release
echo "Executable located at $BUILD_DIR/lvgl_web"
"#;

/// Path of the build wrapper script, relative to the project directory.
pub const BUILD_SCRIPT_PATH: &str = "build.sh";

/// Every static file of the LVGL project, in write order.
pub const SCAFFOLD_FILES: &[ScaffoldFile] = &[
    ScaffoldFile {
        path: "lv_conf.h",
        contents: LV_CONF_H,
        executable: false,
    },
    ScaffoldFile {
        path: "lv_drv_conf.h",
        contents: LV_DRV_CONF_H,
        executable: false,
    },
    ScaffoldFile {
        path: "main.c",
        contents: MAIN_C,
        executable: false,
    },
    ScaffoldFile {
        path: "generated/ui_app.h",
        contents: UI_APP_H,
        executable: false,
    },
    ScaffoldFile {
        path: "CMakeLists.txt",
        contents: CMAKE_LISTS,
        executable: false,
    },
    ScaffoldFile {
        path: BUILD_SCRIPT_PATH,
        contents: BUILD_SH,
        executable: true,
    },
    ScaffoldFile {
        path: "tick.h",
        contents: TICK_H,
        executable: false,
    },
];
