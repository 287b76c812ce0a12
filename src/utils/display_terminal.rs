//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 바인딩 주소와 프록시 라우트 목록을 박스 형태로 출력합니다.

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 요약: 바인딩 주소, 업스트림 주소, 라우트별 집계 헤더
pub fn print_startup_summary(bind_address: &str, upstream: &str, routes: &[(&str, Option<&str>)]) {
    println!();
    print_boxed_title("🚀 QUERY EDGE PROXY");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   🔗 Upstream: {}", upstream);
    for (path, count_header) in routes {
        print_sub_task(path, count_header.unwrap_or("no count header"));
    }
    println!();
}
