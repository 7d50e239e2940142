use core::arch::global_asm;

// One true entry point
// 1. clear the frame pointer
// 2. pass the top of the stack to `start`
// 3. align the stack to 16 bytes
#[cfg(target_arch = "x86_64")]
global_asm!(
    r#"
  .global _start
  .section .text._start
_start:
  xor %rbp,%rbp
  mov %rsp, %rdi
  andq $-16, %rsp
  call start
"#,
    options(att_syntax)
);

// no `libc.a` is linked and `compiler-builtins` doesn't always export these so we provide them.
// They are written in assembly because the compiler would lower the equivalent Rust loops back
// into calls to `memcpy` / `memset`
#[cfg(target_arch = "x86_64")]
global_asm!(
    r#"
  .global memcpy
  .section .text.memcpy
memcpy:
  movq %rdi, %rax
  xorl %ecx, %ecx
  jmp  2f
1:movb (%rsi,%rcx), %r8b
  movb %r8b, (%rdi,%rcx)
  incq %rcx
2:cmpq %rcx, %rdx
  jne  1b
  retq
"#,
    options(att_syntax)
);

#[cfg(target_arch = "x86_64")]
global_asm!(
    r#"
  .global memset
  .section .text.memset
memset:
  movq %rdi, %rax
  xorl %ecx, %ecx
  jmp  2f
1:movb %sil, (%rdi,%rcx)
  incq %rcx
2:cmpq %rcx, %rdx
  jne  1b
  retq
"#,
    options(att_syntax)
);

// `core` is shipped compiled with `-C panic=unwind` so it may contain references to these
#[allow(non_snake_case)]
#[no_mangle]
extern "C" fn _Unwind_Resume() -> ! {
    // status of a SIGABRT'd process
    linux_sys::exit_group(134)
}

#[no_mangle]
extern "C" fn rust_eh_personality() {}
