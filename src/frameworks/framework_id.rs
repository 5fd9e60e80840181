crate::define_id_enum! {
    /// Framework identifier; `Custom` covers frameworks registered by extenders
    FrameworkId {
        StaticSite => "static" | "html",
        Hugo => "hugo",
        Jekyll => "jekyll",
        React => "react",
        Vue => "vue",
        Angular => "angular",
        Vite => "vite",
        Gatsby => "gatsby",
        Astro => "astro",
        NodeJs => "nodejs" | "node",
        Express => "express",
        NestJs => "nestjs",
        Fastify => "fastify",
        NextJs => "nextjs" | "next",
        Nuxt => "nuxt" | "nuxtjs",
        SvelteKit => "sveltekit",
        Go => "go" | "golang",
        Gin => "gin",
        Echo => "echo",
        Fiber => "fiber",
        Python => "python",
        Django => "django",
        Flask => "flask",
        FastApi => "fastapi",
        Java => "java",
        SpringBoot => "spring-boot" | "springboot",
        Php => "php",
        Laravel => "laravel",
        WordPress => "wordpress",
        Docker => "docker",
    }
}
